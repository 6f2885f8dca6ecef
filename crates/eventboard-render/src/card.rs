use eventboard_core::EventView;
use maud::{html, Markup};

/// One dashboard card. The page script builds the same structure.
pub fn card(view: &EventView<'_>) -> Markup {
    let record = view.record;
    let countdown = &view.countdown;

    html! {
        a class="card" href=(record.link()) target="_blank" rel="noopener" {
            div class="card-header" {
                h3 class="card-title" { (record.title()) }
                div class="organizer" {
                    span { "주최: " (record.organizer_name()) " (" (record.organizer_id()) ")" }
                }
            }
            div class="card-body" {
                div class="dates" {
                    div class="date-row" { span { "시작:" } " " span { (record.start_date()) } }
                    div class="date-row" { span { "종료:" } " " span { (record.end_date()) } }
                }
                div class={ "timer-badge " (countdown.class.as_str()) } { (countdown.text) }
            }
        }
    }
}
