//! UI module for TuneSphere.

pub mod icons;
mod messages;
mod state;
mod streams;
pub mod theme;
mod update;
mod views;

use iced::{Element, Subscription, Task, Theme, keyboard, time};
use std::time::Duration;

use crate::artwork::ArtworkLoader;
use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::meta::APP;

pub use messages::Message;
use state::AppState;

/// Spinner rate on the loading screen
const LOADING_TICK: Duration = Duration::from_millis(250);

pub struct TuneSphere {
    state: AppState,
    config: Config,
    source: CatalogSource,
    loader: ArtworkLoader,
}

impl TuneSphere {
    pub fn new(config: Config, source: CatalogSource) -> (Self, Task<Message>) {
        tracing::debug!(target: "ui", "UI::new() started");

        let loader = ArtworkLoader::new(
            config.artwork.fetch_remote,
            config.artwork.request_timeout(),
        );
        tracing::debug!(target: "artwork", remote = loader.fetches_remote(), "Artwork loader ready");
        let load = update::load_catalog_task(source.clone());

        (
            Self {
                state: AppState::Loading(0),
                config,
                source,
                loader,
            },
            load,
        )
    }

    pub fn title(&self) -> String {
        APP.window_title()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.state {
            AppState::Loading(_) => time::every(LOADING_TICK).map(|_| Message::LoadingTick),
            AppState::Error(_) => Subscription::none(),
            AppState::Loaded(s) => {
                let mut subscriptions = Vec::new();

                // One ticker per playback session; a new session id replaces
                // the stream, so ticks from an old session stop at the source
                if let Some(session) = s.transport.session() {
                    subscriptions.push(Subscription::run_with_id(
                        ("playback-ticker", session.id()),
                        streams::ticker_stream(session),
                    ));
                }

                // Keyboard shortcuts - global within the app
                subscriptions.push(keyboard::on_key_press(|key, modifiers| {
                    Some(Message::KeyPressed(key, modifiers))
                }));

                Subscription::batch(subscriptions)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            AppState::Loading(tick) => views::loading_view(*tick),
            AppState::Loaded(s) => views::loaded_view(s, self.config.appearance.show_header),
            AppState::Error(e) => views::error_view(e),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !message.is_tick() {
            tracing::trace!(target: "ui::update", message = ?message, "Update received");
        }

        // Messages that work regardless of state
        match message {
            Message::CatalogLoaded(result) => {
                return update::handle_catalog_loaded(
                    &mut self.state,
                    &self.config,
                    &self.loader,
                    result,
                );
            }
            Message::RetryLoad => {
                tracing::info!(target: "ui", "Retrying catalog load");
                self.state = AppState::Loading(0);
                return update::load_catalog_task(self.source.clone());
            }
            Message::LoadingTick => {
                if let AppState::Loading(tick) = &mut self.state {
                    *tick = tick.wrapping_add(1);
                }
                return Task::none();
            }
            Message::ConfigSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!(target: "config", "Failed to save config: {}", e);
                }
                return Task::none();
            }
            _ => {}
        }

        // Messages that require loaded state
        let AppState::Loaded(s) = &mut self.state else {
            return Task::none();
        };

        match message {
            // Navigation
            Message::SelectTab(tab) => {
                tracing::debug!(target: "ui", tab = tab.label(), "Tab selected");
                s.active_tab = tab;
            }

            // Player messages
            msg @ (Message::PlayerPlayTrack(_)
            | Message::PlayerPlayPlaylist(_)
            | Message::PlayerPlayAll(_)
            | Message::PlayerToggle
            | Message::PlayerNext
            | Message::PlayerPrevious
            | Message::PlayerSeekPreview(_)
            | Message::PlayerSeekRelease
            | Message::PlayerTick(_)
            | Message::PlayerToggleShuffle
            | Message::PlayerCycleRepeat) => {
                return update::handle_player(s, &mut self.config, msg);
            }

            // Likes
            msg @ (Message::ToggleLikeTrack(_)
            | Message::ToggleLikePlaylist(_)
            | Message::ToggleLikeCurrent) => {
                update::handle_likes(s, msg);
            }

            // Logged-only intents
            msg @ (Message::SkipTrack(_)
            | Message::AddToPlaylist(_)
            | Message::FeedLike(_)
            | Message::FeedComment(_)
            | Message::FeedShare(_)
            | Message::CreatePlaylist
            | Message::ConnectWallet
            | Message::SeeAllRecommended) => {
                update::handle_intent(s, msg);
            }

            Message::ArtworkLoaded(reference, result) => {
                update::handle_artwork_loaded(s, reference, result);
            }

            // Keyboard shortcuts
            Message::KeyPressed(key, modifiers) => {
                return update::handle_keyboard(s, key, modifiers);
            }

            _ => {}
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackId;
    use crate::player::Session;
    use crate::test_utils::mock_catalog;
    use state::Tab;

    fn loaded_app() -> TuneSphere {
        let (mut app, _) = TuneSphere::new(Config::default(), CatalogSource::Builtin);
        app.loader = ArtworkLoader::local_only();
        let _ = app.update(Message::CatalogLoaded(Ok(mock_catalog(3))));
        app
    }

    fn loaded(app: &TuneSphere) -> &state::LoadedState {
        match &app.state {
            AppState::Loaded(s) => s,
            _ => panic!("expected loaded state"),
        }
    }

    #[test]
    fn test_starts_loading() {
        let (app, _) = TuneSphere::new(Config::default(), CatalogSource::Builtin);
        assert!(matches!(app.state, AppState::Loading(0)));
    }

    #[test]
    fn test_loading_tick_advances_spinner() {
        let (mut app, _) = TuneSphere::new(Config::default(), CatalogSource::Builtin);
        let _ = app.update(Message::LoadingTick);
        assert!(matches!(app.state, AppState::Loading(1)));
    }

    #[test]
    fn test_retry_returns_to_loading() {
        let (mut app, _) = TuneSphere::new(Config::default(), CatalogSource::Builtin);
        let _ = app.update(Message::CatalogLoaded(Err("boom".to_string())));
        assert!(matches!(app.state, AppState::Error(_)));
        let _ = app.update(Message::RetryLoad);
        assert!(matches!(app.state, AppState::Loading(0)));
    }

    #[test]
    fn test_tab_selection() {
        let mut app = loaded_app();
        let _ = app.update(Message::SelectTab(Tab::Profile));
        assert_eq!(loaded(&app).active_tab, Tab::Profile);
    }

    #[test]
    fn test_like_shared_between_tabs() {
        let mut app = loaded_app();
        let _ = app.update(Message::ToggleLikeTrack(TrackId::from("1")));
        let _ = app.update(Message::SelectTab(Tab::Feed));
        assert!(loaded(&app).likes.is_track_liked(&TrackId::from("1")));
    }

    #[test]
    fn test_tick_while_paused_keeps_elapsed() {
        let mut app = loaded_app();
        let track = loaded(&app).recommended[0].clone();
        let _ = app.update(Message::PlayerPlayTrack(track));
        let session = loaded(&app).transport.session().unwrap();
        let _ = app.update(Message::PlayerTick(session));
        assert_eq!(loaded(&app).transport.elapsed(), 1);

        let _ = app.update(Message::PlayerToggle);
        let _ = app.update(Message::PlayerTick(session));
        let _ = app.update(Message::PlayerTick(Session(session.id() + 100)));
        assert_eq!(loaded(&app).transport.elapsed(), 1);
    }

    #[test]
    fn test_messages_ignored_before_load() {
        let (mut app, _) = TuneSphere::new(Config::default(), CatalogSource::Builtin);
        let _ = app.update(Message::PlayerToggle);
        let _ = app.update(Message::SelectTab(Tab::Feed));
        assert!(matches!(app.state, AppState::Loading(0)));
    }
}
