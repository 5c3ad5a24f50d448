//! Application metadata shown in the window title, hero card and CLI.

/// Static application info.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub max_playlist_tracks: usize,
    pub max_playlists_per_user: usize,
    pub supported_audio_formats: &'static [&'static str],
}

pub const APP: AppInfo = AppInfo {
    name: "TuneSphere",
    tagline: "Discover Music, Connect with Culture",
    version: "2.0 Plus",
    description: "A community-driven music app for discovering music, \
                  sharing playlists, and engaging with other music enthusiasts.",
    max_playlist_tracks: 50,
    max_playlists_per_user: 20,
    supported_audio_formats: &["mp3", "wav", "ogg"],
};

impl AppInfo {
    /// Window title: "Name - Tagline".
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.name, self.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        assert_eq!(
            APP.window_title(),
            "TuneSphere - Discover Music, Connect with Culture"
        );
    }
}
