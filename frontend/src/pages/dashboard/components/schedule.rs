use crate::{
    components::icons::CalendarIcon,
    pages::dashboard::{repository::ScheduleEntry, utils::format_time},
};
use leptos::*;

#[component]
pub fn ScheduleCard(entries: Vec<ScheduleEntry>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-xl font-bold text-gray-800">"Today's Schedule"</h3>
                <CalendarIcon size=24 />
            </div>
            <ul class="space-y-3">
                <For
                    each=move || entries.clone()
                    key=|entry| entry.id
                    children=move |entry: ScheduleEntry| {
                        view! {
                            <li class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                <div>
                                    <div class="font-medium text-gray-800">{entry.title}</div>
                                    <div class="text-sm text-gray-600">{format_time(entry.time)}</div>
                                </div>
                                <div class="text-sm text-gray-600 bg-blue-100 px-2 py-1 rounded">
                                    {entry.weather.label()}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
            // Placeholder control: adding events is not supported.
            <button
                type="button"
                class="w-full mt-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors"
            >
                "Add New Event"
            </button>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::repository::todays_schedule;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn schedule_card_lists_entries_in_order() {
        let html = render_to_string(move || view! { <ScheduleCard entries=todays_schedule() /> });
        let run = html.find("Morning Run").unwrap();
        let lunch = html.find("Lunch Meeting").unwrap();
        let walk = html.find("Evening Walk").unwrap();
        assert!(run < lunch && lunch < walk);
        assert!(html.contains("7:00 AM"));
        assert!(html.contains("12:00 PM"));
        assert!(html.contains("6:00 PM"));
        assert!(html.contains("Clear"));
        assert!(html.contains("Add New Event"));
    }

    #[test]
    fn schedule_card_with_no_entries_still_offers_add_button() {
        let html = render_to_string(move || view! { <ScheduleCard entries=Vec::new() /> });
        assert!(html.contains("Today&#x27;s Schedule") || html.contains("Today's Schedule"));
        assert!(html.contains("Add New Event"));
    }
}
