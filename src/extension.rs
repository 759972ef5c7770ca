//! Extension lifecycle.
//!
//! [`Extension::activate`] takes ownership of the output channel and the
//! settings scope; [`Extension::deactivate`] logs the shutdown, disposes every
//! registered subscription in order, and disposes the channel last so the
//! shutdown line is its final entry.

use crate::config::{ConfigError, ConfigStore, ConfigurationScope, SettingName, key};
use crate::out;
use crate::output::OutputChannel;

/// Greeting used when `customMessage` is unset.
pub const HELLO_FALLBACK: &str = "Hello World!";

/// Something released at deactivation.
pub trait Disposable: Send {
    fn dispose(self: Box<Self>);
}

impl<F: FnOnce() + Send> Disposable for F {
    fn dispose(self: Box<Self>) {
        (*self)()
    }
}

pub struct Extension<S = Box<dyn ConfigStore>> {
    channel: OutputChannel,
    settings: ConfigurationScope<S>,
    subscriptions: Vec<Box<dyn Disposable>>,
}

impl<S: ConfigStore> Extension<S> {
    /// Start the extension. The scope identifier doubles as the extension's name.
    pub fn activate(channel: OutputChannel, settings: ConfigurationScope<S>) -> Self {
        out!(channel, "", settings.identifier(), " activated");
        log::info!("Activated {}", settings.identifier());
        Self {
            channel,
            settings,
            subscriptions: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        self.settings.identifier()
    }

    pub fn channel(&self) -> &OutputChannel {
        &self.channel
    }

    pub fn settings(&self) -> &ConfigurationScope<S> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ConfigurationScope<S> {
        &mut self.settings
    }

    /// Register something to release at deactivation.
    pub fn subscribe(&mut self, subscription: impl Disposable + 'static) {
        self.subscriptions.push(Box::new(subscription));
    }

    /// The hello-world command: log and return the configured greeting.
    pub fn hello_world(&self) -> Result<String, ConfigError> {
        let message = self
            .settings
            .get::<key::CustomMessage>()?
            .unwrap_or_else(|| HELLO_FALLBACK.to_string());
        out!(
            self.channel,
            "Hello World command executed with message: ",
            message,
            ""
        );
        Ok(message)
    }

    /// Validate and persist a setting given as text, logging the change.
    ///
    /// Rejected values are logged too, then returned to the caller.
    pub fn update_setting(&mut self, name: SettingName, raw: &str) -> Result<String, ConfigError> {
        match self.settings.set_raw(name, raw) {
            Ok(value) => {
                out!(self.channel, "", name, " updated to: ", value, "");
                Ok(value)
            }
            Err(e) => {
                out!(self.channel, "Failed to update ", name, ": ", e, "");
                Err(e)
            }
        }
    }

    /// Shut down: log, dispose subscriptions in registration order, then the channel.
    pub fn deactivate(self) {
        let Self {
            channel,
            settings,
            subscriptions,
        } = self;

        out!(channel, "", settings.identifier(), " deactivated");
        for subscription in subscriptions {
            subscription.dispose();
        }
        log::info!("Deactivated {}", settings.identifier());
        channel.dispose();
    }
}

impl<S> std::fmt::Debug for Extension<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("channel", &self.channel)
            .field("settings", &self.settings)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
