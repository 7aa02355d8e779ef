//! App state for the lookup widget
//!
//! Holds only presentation state (input buffer, toast, theme); everything
//! about the lookup itself lives in the controller.

use std::time::Instant;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::controller::{LookupController, LookupView};
use crate::interfaces::tui::constants::{MAX_INPUT_LENGTH, SPINNER_FRAMES};
use crate::interfaces::tui::theme::Theme;
use crate::notify::Notification;

/// A failure notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

pub struct App {
    controller: LookupController,
    notifications: UnboundedReceiver<Notification>,

    pub input: String,
    pub toast: Option<Toast>,
    pub theme: Theme,
    pub service_url: String,

    spinner_frame: usize,
}

impl App {
    pub fn new(
        controller: LookupController,
        notifications: UnboundedReceiver<Notification>,
        theme: Theme,
        service_url: String,
    ) -> Self {
        Self {
            controller,
            notifications,
            input: String::new(),
            toast: None,
            theme,
            service_url,
            spinner_frame: 0,
        }
    }

    /// Current projection of the controller state
    pub fn view(&self) -> LookupView {
        self.controller.current_view()
    }

    /// Submit the current input; ignored while a lookup is in flight
    pub fn submit(&mut self) {
        if self.controller.spawn_submit(&self.input).is_none() {
            debug!("Search ignored, lookup already in progress");
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LENGTH && !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Advance timers: pick up new notifications and expire old ones
    pub fn tick(&mut self, now: Instant) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.toast = Some(Toast {
                message: notification.message,
                expires_at: now + notification.duration,
            });
        }

        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }

        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Tear down the controller; late results are discarded
    pub fn unmount(&mut self) {
        self.controller.destroy();
        self.toast = None;
    }
}
