use yew::prelude::*;

fn icon_size() -> Classes {
    classes!("h-4", "w-4")
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_else(icon_size)]
    pub class: Classes,
}

/// Calendar glyph (lucide "calendar" outline).
#[function_component(CalendarIcon)]
pub fn calendar_icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M8 2v4" />
            <path d="M16 2v4" />
            <rect width="18" height="18" x="3" y="4" rx="2" />
            <path d="M3 10h18" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <div role="alert" class={classes!("notice", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[function_component(NoticeDescription)]
pub fn notice_description(props: &NoticeProps) -> Html {
    html! {
        <div class={classes!("notice-description", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
