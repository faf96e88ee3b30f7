use yew::prelude::*;

use crate::state::Status;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub status: Status,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <div id="startStatus" class="start-status" aria-live="polite"
            style="position:absolute; right:12px; top:12px; padding:6px 8px; border-radius:10px; background:linear-gradient(90deg,#fff,#f7f7ff); color:#333; font-weight:700; font-size:12px; box-shadow:0 6px 14px rgba(0,0,0,0.08);">
            { props.status.label() }
        </div>
    }
}
