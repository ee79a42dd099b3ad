//! GUI module using iced
//!
//! One screen: a phone number field, a conditional paste button and an
//! "Open" button.

use iced::widget::{button, column, container, mouse_area, text, text_input, Row, Space};
use iced::{event, mouse, touch, window, Alignment, Element, Event, Length, Subscription, Task};
use tracing::{debug, info};

use crate::clipboard::{check_clipboard, ClipboardSource};
use crate::core::PhoneDetector;
use crate::launcher::DeepLinkOpener;

// Sub-modules
pub mod app;
pub mod messages;
pub mod state;

// Re-exports for convenience
pub use app::WaOpenApp;
pub use messages::Message;
pub use state::LaunchStatus;

/// Text to put in the field when the user accepts the paste prompt.
///
/// Falls back to the raw clipboard text if it no longer looks like a
/// number, and to an empty string if it holds no text.
pub fn paste_text(source: &dyn ClipboardSource, detector: &PhoneDetector) -> String {
    match source.read_text() {
        Ok(Some(text)) => detector.candidate(&text).unwrap_or(text),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!("Could not read clipboard for paste: {}", e);
            String::new()
        }
    }
}

/// Open the chat for `normalized` and report back as a message.
///
/// Runs inside a task: the platform opener may block until the URL
/// handler exits.
pub fn launch(launcher: &DeepLinkOpener, normalized: &str) -> Message {
    Message::LaunchFinished(
        launcher
            .open(normalized)
            .map(|launched| launched.url)
            .map_err(|e| e.to_string()),
    )
}

/// Left clicks and touches that a widget consumed. Combined with the
/// hover flag this tells us the phone number field was tapped.
fn captured_press(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status != event::Status::Captured {
        return None;
    }
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Message::PointerPressed),
        _ => None,
    }
}

impl WaOpenApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::FieldHovered(hovered) => {
                self.field_hovered = hovered;
            }
            Message::PointerPressed => {
                if self.field_hovered {
                    return self.update(Message::InputTapped);
                }
            }
            Message::InputTapped => {
                debug!("Phone field tapped, checking clipboard");
                self.clipboard_checks += 1;
                let source = self.clipboard.clone();
                let detector = self.detector;
                return Task::perform(
                    async move { check_clipboard(source.as_ref(), &detector) },
                    Message::ClipboardChecked,
                );
            }
            Message::ClipboardChecked(candidate) => {
                if candidate.is_some() {
                    self.should_prompt_for_paste = true;
                }
            }
            Message::PastePressed => {
                let source = self.clipboard.clone();
                let detector = self.detector;
                return Task::perform(
                    async move { Some(paste_text(source.as_ref(), &detector)) },
                    Message::Pasted,
                );
            }
            Message::Pasted(text) => {
                self.input = text.unwrap_or_default();
                self.should_prompt_for_paste = false;
            }
            Message::OpenPressed => {
                let normalized = self.normalizer.normalize(&self.input);
                info!("📞 Parsed number is: {}", normalized);

                self.status = LaunchStatus::Opening(normalized.clone());
                let launcher = self.launcher.clone();
                return Task::perform(async move { launch(&launcher, &normalized) }, |m| m);
            }
            Message::LaunchFinished(result) => {
                self.status = match result {
                    Ok(url) => LaunchStatus::Launched(url),
                    Err(reason) => LaunchStatus::Failed(reason),
                };
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(captured_press)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let field = mouse_area(
            text_input("Phone number", &self.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::OpenPressed)
                .padding(12)
                .size(20)
                .width(Length::Fill),
        )
        .on_enter(Message::FieldHovered(true))
        .on_exit(Message::FieldHovered(false));

        let paste_btn = self.should_prompt_for_paste.then(|| {
            button(text("Paste from Clipboard"))
                .padding(12)
                .style(button::secondary)
                .on_press(Message::PastePressed)
        });

        let open_btn = button(text("Open"))
            .padding(12)
            .style(button::success)
            .on_press(Message::OpenPressed);

        let form = Row::new()
            .push(field)
            .push_maybe(paste_btn)
            .push(open_btn)
            .spacing(10)
            .align_y(Alignment::Center);

        let status: Element<Message> = match &self.status {
            LaunchStatus::Idle => Space::with_height(24).into(),
            LaunchStatus::Opening(number) => text(format!("Opening chat with {}...", number))
                .style(text::secondary)
                .into(),
            LaunchStatus::Launched(url) => text(format!("Opened {}", url))
                .style(text::secondary)
                .into(),
            LaunchStatus::Failed(reason) => text(format!("Cannot open WhatsApp: {}", reason))
                .style(text::danger)
                .into(),
        };

        container(
            column![
                text("Open in WhatsApp").size(40),
                text("Chat with any number without saving a contact")
                    .size(18)
                    .style(text::secondary),
                Space::with_height(20),
                form,
                status,
            ]
            .spacing(15)
            .max_width(640.0)
            .align_x(Alignment::Center),
        )
        .padding(20)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
