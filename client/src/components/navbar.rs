//! Top navigation bar: brand link home, booking link out to the bot.

use leptos::prelude::*;

/// External booking entry point. Reservations happen in the bot, not here.
pub const BOOKING_BOT_URL: &str = "http://t.me/parking_iot_bot";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "SmartParking"
            </a>
            <a class="navbar__booking" href=BOOKING_BOT_URL>
                "Book a space"
            </a>
        </nav>
    }
}
