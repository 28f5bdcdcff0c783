//! Inline SVG glyphs used by the skill and project catalogs.
//!
//! Icons are plain `fn() -> AnyView` so a compiled-in catalog entry can
//! hold one as a fn pointer.

use leptos::prelude::*;

pub type IconFn = fn() -> AnyView;

pub fn python() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2c-1.5 0-2.9.2-4.1.6-2.5.8-3 2.4-3 4v2.5h6v1H5.1c-1.8 0-3.4 1.1-3.9 3.2-.6 2.4-.6 3.9 0 6.4.5 1.9 1.6 3.2 3.4 3.2h2.2v-2.9c0-2 1.8-3.8 3.8-3.8h5.9c1.7 0 3-1.4 3-3.1V6.6c0-1.7-1.4-2.9-3-3.2-1-.2-2-.4-3.3-.4zm-3.3 2.3c.6 0 1.1.5 1.1 1.1s-.5 1.2-1.1 1.2c-.6 0-1.2-.5-1.2-1.2s.5-1.1 1.2-1.1z" />
            <path d="M18.9 9.6v2.8c0 2.1-1.9 3.9-3.9 3.9h-5.9c-1.7 0-3 1.4-3 3.1v4.8c0 1.7 1.5 2.7 3 3.1 1.9.5 3.7.6 5.9 0 1.5-.4 3-1.2 3-3.1v-2.3h-6v-1h9c1.8 0 2.4-1.2 3-3.2.6-2.1.5-4.1 0-6.4-.4-1.7-1.2-3.2-3-3.2h-2.1zm-3.4 12.1c.6 0 1.2.5 1.2 1.2s-.5 1.1-1.2 1.1c-.6 0-1.1-.5-1.1-1.1s.5-1.2 1.1-1.2z" />
        </svg>
    }
    .into_any()
}

pub fn numpy() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12.5 2L3 7.5v9L12.5 22l9.5-5.5v-9L12.5 2zm0 2.3l6.8 3.9-6.8 3.9-6.8-3.9 6.8-3.9zM5 9.2l6.5 3.8v7.6L5 16.8V9.2zm15 0v7.6l-6.5 3.8V13l6.5-3.8z" />
        </svg>
    }
    .into_any()
}

pub fn pandas() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M8 3h2v7H8V3zm0 9h2v9H8v-9zm6 0h2v5h-2v-5zm0-9h2v7h-2V3zm0 16h2v2h-2v-2zM4 7h2v10H4V7zm14 0h2v10h-2V7z" />
        </svg>
    }
    .into_any()
}

pub fn sql() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2C6.48 2 2 4.02 2 6.5V18c0 2.21 4.48 4 10 4s10-1.79 10-4V6.5C22 4.02 17.52 2 12 2zm0 2c4.42 0 8 1.34 8 3s-3.58 3-8 3-8-1.34-8-3 3.58-3 8-3zM4 9.73c1.54.94 4.39 1.77 8 1.77s6.46-.83 8-1.77V13c0 1.66-3.58 3-8 3s-8-1.34-8-3V9.73zm0 6c1.54.94 4.39 1.77 8 1.77s6.46-.83 8-1.77V18c0 1.66-3.58 3-8 3s-8-1.34-8-3v-2.27z" />
        </svg>
    }
    .into_any()
}

pub fn javascript() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M3 3h18v18H3V3zm4.5 15c.5 1 1.5 1.5 2.5 1.5 1.5 0 2.5-1 2.5-2.5v-6h-2v6c0 .5-.5 1-1 1s-1-.5-1.5-1l-1.5 1zm7 0c.5 1 2 1.5 3.5 1.5 2 0 3.5-1 3.5-2.5 0-1.5-1-2-2.5-2.5l-.5-.2c-1-.4-1.5-.6-1.5-1.3 0-.5.5-1 1.5-1s1.5.5 2 1l1-1c-.5-1-1.5-1.5-3-1.5s-3 1-3 2.5c0 1.5 1 2 2.5 2.5l.5.2c1 .4 1.5.6 1.5 1.3 0 .6-.5 1-1.5 1s-2-.5-2.5-1l-1.5 1z" />
        </svg>
    }
    .into_any()
}

pub fn html() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M4 2l1.5 17L12 21l6.5-2L20 2H4zm12.5 5H8.5l.2 2h7.6l-.6 7-3.7 1-3.7-1-.3-3h2l.1 1.5 1.9.5 1.9-.5.2-2.5H7.7l-.5-6h9.5l-.2 1z" />
        </svg>
    }
    .into_any()
}

pub fn react() -> AnyView {
    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            class="w-full h-full"
            stroke="currentColor"
            stroke-width="1.6"
        >
            <circle cx="12" cy="12" r="1.8" fill="currentColor" stroke="none" />
            <ellipse cx="12" cy="12" rx="9" ry="3.8" />
            <ellipse cx="12" cy="12" rx="9" ry="3.8" transform="rotate(60 12 12)" />
            <ellipse cx="12" cy="12" rx="9" ry="3.8" transform="rotate(120 12 12)" />
        </svg>
    }
    .into_any()
}

pub fn tailwind() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 6c-2.67 0-4.33 1.33-5 4 1-1.33 2.17-1.83 3.5-1.5.76.19 1.3.73 1.9 1.33.97.97 2.09 2.09 4.6 2.09 2.67 0 4.33-1.33 5-4-1 1.33-2.17 1.83-3.5 1.5-.76-.19-1.3-.73-1.9-1.33C15.63 7.12 14.51 6 12 6zm-5 6c-2.67 0-4.33 1.33-5 4 1-1.33 2.17-1.83 3.5-1.5.76.19 1.3.73 1.9 1.33.97.97 2.09 2.09 4.6 2.09 2.67 0 4.33-1.33 5-4-1 1.33-2.17 1.83-3.5 1.5-.76-.19-1.3-.73-1.9-1.33C10.63 13.12 9.51 12 7 12z" />
        </svg>
    }
    .into_any()
}

pub fn git() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M21.62 11.11l-8.73-8.73a1.3 1.3 0 00-1.84 0L9 4.44l2.32 2.32a1.54 1.54 0 011.95 1.97l2.24 2.24a1.55 1.55 0 11-.93.87l-2.09-2.09v5.5a1.55 1.55 0 11-1.28-.06V9.53a1.55 1.55 0 01-.84-2.03L8.06 5.19l-5.68 5.68a1.3 1.3 0 000 1.84l8.73 8.73a1.3 1.3 0 001.84 0l8.67-8.67a1.3 1.3 0 000-1.66z" />
        </svg>
    }
    .into_any()
}

pub fn github() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2C6.48 2 2 6.48 2 12c0 4.42 2.87 8.17 6.84 9.49.5.09.68-.22.68-.48v-1.69c-2.78.61-3.37-1.34-3.37-1.34-.46-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.61.07-.61 1 .07 1.53 1.03 1.53 1.03.89 1.53 2.34 1.09 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.55-1.11-4.55-4.94 0-1.09.39-1.98 1.03-2.68-.1-.25-.45-1.27.1-2.64 0 0 .84-.27 2.75 1.02A9.58 9.58 0 0112 6.8c.85.004 1.71.11 2.51.33 1.91-1.29 2.75-1.02 2.75-1.02.55 1.37.2 2.39.1 2.64.64.7 1.03 1.59 1.03 2.68 0 3.84-2.34 4.68-4.57 4.93.36.31.68.92.68 1.85v2.75c0 .27.18.58.69.48A10.02 10.02 0 0022 12c0-5.52-4.48-10-10-10z" />
        </svg>
    }
    .into_any()
}

pub fn docker() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M13.98 11.08h2.12v2.02h-2.12v-2.02zm-2.58 0h2.12v2.02h-2.12v-2.02zm-2.57 0h2.11v2.02H8.83v-2.02zm-2.57 0h2.11v2.02H6.26v-2.02zm2.57-2.47h2.11v2.02H8.83V8.61zm2.57 0h2.12v2.02h-2.12V8.61zm2.58 0h2.12v2.02h-2.12V8.61zm0-2.47h2.12v2.02h-2.12V6.14zM23 12.27c-.29-.32-.93-.48-1.48-.38-.07-.56-.37-1.04-.78-1.46l-.16-.15-.16.13c-.4.32-.61.77-.68 1.24-.03.19-.03.39 0 .57.08.42.27.8.55 1.09-.25.15-.52.27-.8.37-.51.17-1.01.24-1.53.24H.95l-.03.24c-.09.82.02 1.65.27 2.43l.12.32.14.29c.79 1.41 2.1 2.36 3.72 2.78.67.17 1.36.26 2.05.27 1.83.02 3.57-.43 5.08-1.37 1.22-.76 2.26-1.82 3.04-3.16.77.04 1.59-.06 2.26-.45.55-.32.99-.86 1.12-1.47l.06-.27-.28-.22z" />
        </svg>
    }
    .into_any()
}

pub fn power_bi() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M10 2v20c0 .55.45 1 1 1h2c.55 0 1-.45 1-1V2c0-.55-.45-1-1-1h-2c-.55 0-1 .45-1 1zm6 4v16c0 .55.45 1 1 1h2c.55 0 1-.45 1-1V6c0-.55-.45-1-1-1h-2c-.55 0-1 .45-1 1zM4 10v12c0 .55.45 1 1 1h2c.55 0 1-.45 1-1V10c0-.55-.45-1-1-1H5c-.55 0-1 .45-1 1z" />
        </svg>
    }
    .into_any()
}

pub fn streamlit() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2L3 7l9 5 9-5-9-5zM3 17l9 5 9-5-9-5-9 5z" />
        </svg>
    }
    .into_any()
}

pub fn eda() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM9 17H7v-7h2v7zm4 0h-2V7h2v10zm4 0h-2v-4h2v4z" />
        </svg>
    }
    .into_any()
}

pub fn feature_eng() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2L4 6v12l8 4 8-4V6l-8-4zm0 2.5L17 7l-5 2.5L7 7l5-2.5zM6 8.5l5 2.5v7L6 15.5v-7zm12 0v7l-5 2.5v-7l5-2.5z" />
        </svg>
    }
    .into_any()
}

pub fn ml() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2a10 10 0 100 20 10 10 0 000-20zm0 3a2.5 2.5 0 110 5 2.5 2.5 0 010-5zm-4 9a2 2 0 110 4 2 2 0 010-4zm8 0a2 2 0 110 4 2 2 0 010-4z" />
            <path d="M12 9.5c-.5 0-1 .1-1.5.3l-1.5 2.7c.5.3 1 .5 1.5.5h3c.5 0 1-.2 1.5-.5l-1.5-2.7c-.5-.2-1-.3-1.5-.3z" />
        </svg>
    }
    .into_any()
}

pub fn statistics() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M5 9.2h3V19H5V9.2zM10.6 5h2.8v14h-2.8V5zm5.6 8H19v6h-2.8v-6z" />
        </svg>
    }
    .into_any()
}

pub fn validation() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M12 2L4 5v6.09c0 5.05 3.41 9.76 8 10.91 4.59-1.15 8-5.86 8-10.91V5l-8-3zm-1 15l-4-4 1.41-1.41L11 14.17l6.59-6.59L19 9l-8 8z" />
        </svg>
    }
    .into_any()
}

pub fn api() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M14 12l-2 2-2-2 2-2 2 2zm-2-6l2.12 2.12 2.5-2.5L12 1 7.38 5.62l2.5 2.5L12 6zm-6 6l2.12-2.12-2.5-2.5L1 12l4.62 4.62 2.5-2.5L6 12zm12 0l-2.12 2.12 2.5 2.5L23 12l-4.62-4.62-2.5 2.5L18 12zm-6 6l-2.12-2.12-2.5 2.5L12 23l4.62-4.62-2.5-2.5L12 18z" />
        </svg>
    }
    .into_any()
}

pub fn etl() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M17 16l-4-4V8.82C14.16 8.4 15 7.3 15 6c0-1.66-1.34-3-3-3S9 4.34 9 6c0 1.3.84 2.4 2 2.82V12l-4 4H3v5h5v-3.05l4-4.2 4 4.2V21h5v-5h-4z" />
        </svg>
    }
    .into_any()
}

pub fn docs() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M14 2H6c-1.1 0-1.99.9-1.99 2L4 20c0 1.1.89 2 1.99 2H18c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z" />
        </svg>
    }
    .into_any()
}

pub fn qa() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M19.77 5.03l1.4 1.4L8.43 19.17l-5.6-5.6 1.4-1.4 4.2 4.2L19.77 5.03zm-5.6 0L7.2 12l-1.4-1.4L12.77 3.63l1.4 1.4zM5.6 13.17L4.2 14.57l1.4 1.4 1.4-1.4-1.4-1.4z" />
        </svg>
    }
    .into_any()
}

pub fn data_validation() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M4 6h16v2H4zm0 5h16v2H4zm0 5h16v2H4z" />
            <path d="M20 17l-1.41-1.41L16 18.17l-1.59-1.59L13 18l3 3 4-4z" />
        </svg>
    }
    .into_any()
}

// UI glyphs below are outline-style to match the text they sit beside.

pub fn bar_chart() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" d="M3 3v18h18" />
            <path stroke-linecap="round" d="M7 15v3M12 10v8M17 6v12" />
        </svg>
    }
    .into_any()
}

pub fn code() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" stroke-linejoin="round" d="M16 18l6-6-6-6M8 6l-6 6 6 6" />
        </svg>
    }
    .into_any()
}

pub fn laptop() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <rect x="4" y="5" width="16" height="11" rx="1" />
            <path stroke-linecap="round" d="M2 19h20" />
        </svg>
    }
    .into_any()
}

pub fn file_code() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path d="M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8z" />
            <path stroke-linecap="round" stroke-linejoin="round" d="M14 2v6h6M10 13l-2 2 2 2M14 13l2 2-2 2" />
        </svg>
    }
    .into_any()
}

pub fn dollar() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" d="M12 2v20" />
            <path
                stroke-linecap="round"
                d="M17 5.5C16 4.5 14.5 4 12 4c-3 0-5 1.5-5 3.5S9 11 12 11s5 1.5 5 3.5-2 3.5-5 3.5c-2.5 0-4-.5-5-1.5"
            />
        </svg>
    }
    .into_any()
}

pub fn dice() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <circle cx="8.5" cy="8.5" r="1" fill="currentColor" stroke="none" />
            <circle cx="15.5" cy="8.5" r="1" fill="currentColor" stroke="none" />
            <circle cx="12" cy="12" r="1" fill="currentColor" stroke="none" />
            <circle cx="8.5" cy="15.5" r="1" fill="currentColor" stroke="none" />
            <circle cx="15.5" cy="15.5" r="1" fill="currentColor" stroke="none" />
        </svg>
    }
    .into_any()
}

pub fn external_link() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3"
            />
        </svg>
    }
    .into_any()
}

pub fn chevron_down() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 9l6 6 6-6" />
        </svg>
    }
    .into_any()
}

pub fn mail() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path stroke-linecap="round" stroke-linejoin="round" d="M22 6l-10 7L2 6" />
        </svg>
    }
    .into_any()
}

pub fn send() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" stroke-linejoin="round" d="M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z" />
        </svg>
    }
    .into_any()
}

pub fn spinner() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full animate-spin">
            <path stroke-linecap="round" d="M21 12a9 9 0 11-6.22-8.56" />
        </svg>
    }
    .into_any()
}

pub fn check_circle() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <circle cx="12" cy="12" r="10" />
            <path stroke-linecap="round" stroke-linejoin="round" d="M8 12l3 3 5-6" />
        </svg>
    }
    .into_any()
}

pub fn x_circle() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <circle cx="12" cy="12" r="10" />
            <path stroke-linecap="round" d="M15 9l-6 6M9 9l6 6" />
        </svg>
    }
    .into_any()
}

pub fn menu() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
    .into_any()
}

pub fn close() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-full h-full">
            <path stroke-linecap="round" d="M6 6l12 12M18 6L6 18" />
        </svg>
    }
    .into_any()
}

pub fn linkedin() -> AnyView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" class="w-full h-full">
            <path d="M19 3a2 2 0 012 2v14a2 2 0 01-2 2h-14a2 2 0 01-2-2V5a2 2 0 012-2h14zM8.34 18.34V9.75H5.67v8.59h2.67zM7 8.48a1.56 1.56 0 100-3.12 1.56 1.56 0 000 3.12zm11.34 9.86v-4.93c0-2.64-1.41-3.87-3.29-3.87-1.52 0-2.2.84-2.58 1.43V9.75h-2.67c.04.75 0 8.59 0 8.59h2.67v-4.8c0-.25.02-.51.1-.7.2-.51.66-1.04 1.43-1.04 1 0 1.4.77 1.4 1.9v4.64h2.94z" />
        </svg>
    }
    .into_any()
}
