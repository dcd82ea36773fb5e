//! Inline stroke icons (Lucide, 24x24 grid).

use yew::prelude::*;

/// Path data of one icon, drawn with a 2px round stroke.
pub type IconPaths = &'static [&'static str];

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub paths: IconPaths,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={classes!("icon", props.class.clone())}
            aria-hidden="true"
        >
            { for props.paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

pub const ICON_ARROW_RIGHT: IconPaths = &["M5 12h14", "m12 5 7 7-7 7"];
pub const ICON_ARROW_LEFT: IconPaths = &["m12 19-7-7 7-7", "M19 12H5"];
pub const ICON_MENU: IconPaths = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const ICON_X: IconPaths = &["M18 6 6 18", "m6 6 12 12"];
pub const ICON_CHEVRON_DOWN: IconPaths = &["m6 9 6 6 6-6"];
pub const ICON_CHECK: IconPaths = &["M20 6 9 17l-5-5"];
pub const ICON_CHECK_CIRCLE: IconPaths = &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"];
pub const ICON_ALERT_CIRCLE: IconPaths = &[
    "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
    "M12 8v4",
    "M12 16h.01",
];
pub const ICON_SEND: IconPaths = &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"];
pub const ICON_SPARKLES: IconPaths = &[
    "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0Z",
    "M20 3v4",
    "M22 5h-4",
];
pub const ICON_BOT: IconPaths = &[
    "M12 8V4H8",
    "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2Z",
    "M2 14h2",
    "M20 14h2",
    "M15 13v2",
    "M9 13v2",
];
pub const ICON_BUILDING: IconPaths = &[
    "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
    "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
    "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
    "M10 6h4",
    "M10 10h4",
    "M10 14h4",
    "M10 18h4",
];
pub const ICON_DOLLAR: IconPaths = &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"];
pub const ICON_SERVER: IconPaths = &[
    "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Z",
    "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2Z",
    "M6 6h.01",
    "M6 18h.01",
];
pub const ICON_PALETTE: IconPaths = &[
    "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.3A5.7 5.7 0 0 0 22 9.7C22 5.5 17.5 2 12 2Z",
    "M13.5 6.5h.01",
    "M17.5 10.5h.01",
    "M8.5 7.5h.01",
    "M6.5 12.5h.01",
];
