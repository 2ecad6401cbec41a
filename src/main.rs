use consultation_scheduler::config::load_config;
use consultation_scheduler::form::ContactCalendarForm;
use gloo::console::log;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(load_config);

    {
        let title = config.title.clone();
        use_effect_with((), move |_| {
            log!(format!("{title}: form mounted"));
            || ()
        });
    }

    html! {
        <div class="wrap">
            <ContactCalendarForm config={(*config).clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
