//! Audio event routing
//!
//! The simulation emits [`GameEvent`]s; [`AudioManager`] turns them into sound
//! effects and music changes for whichever [`SoundPlayer`] backs it. Playback
//! is fire-and-forget: a player never reports back into the simulation.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Laser fired
    Laser,
    /// Thrust engaged
    Rocket,
    /// Ship struck by an asteroid
    Explosion,
    /// Asteroid hit by a laser
    Crack,
}

impl SoundEffect {
    /// Effect for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::LaserFired => Some(SoundEffect::Laser),
            GameEvent::ThrustStarted => Some(SoundEffect::Rocket),
            GameEvent::ShipHit => Some(SoundEffect::Explosion),
            GameEvent::AsteroidCracked { .. } => Some(SoundEffect::Crack),
            GameEvent::PhaseChanged { .. }
            | GameEvent::SoundToggled(_)
            | GameEvent::MusicToggled(_) => None,
        }
    }
}

/// Playback backend supplied by the host
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
    /// Start or stop the looping background track
    fn set_music(&mut self, playing: bool);
}

/// Audio manager for the game
pub struct AudioManager<P: SoundPlayer> {
    player: P,
    sound_on: bool,
    music_on: bool,
}

impl<P: SoundPlayer> AudioManager<P> {
    pub fn new(player: P, settings: &Settings) -> Self {
        let mut manager = Self {
            player,
            sound_on: settings.sound_on,
            music_on: settings.music_on,
        };
        if manager.music_on {
            manager.player.set_music(true);
        }
        manager
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Route one tick's events to the player
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::SoundToggled(on) => self.sound_on = on,
                GameEvent::MusicToggled(on) => {
                    if on != self.music_on {
                        self.music_on = on;
                        self.player.set_music(on);
                    }
                }
                _ => {
                    if !self.sound_on {
                        continue;
                    }
                    if let Some(effect) = SoundEffect::for_event(event) {
                        self.player.play(effect);
                    }
                }
            }
        }
    }
}

/// Player that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogPlayer;

impl SoundPlayer for LogPlayer {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Sound: {:?}", effect);
    }

    fn set_music(&mut self, playing: bool) {
        log::debug!("Music {}", if playing { "started" } else { "stopped" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AsteroidTier;

    #[derive(Default)]
    struct Recorder {
        played: Vec<SoundEffect>,
        music: Vec<bool>,
    }

    impl SoundPlayer for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }

        fn set_music(&mut self, playing: bool) {
            self.music.push(playing);
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        audio.handle_events(&[
            GameEvent::LaserFired,
            GameEvent::ThrustStarted,
            GameEvent::ShipHit,
            GameEvent::AsteroidCracked {
                tier: AsteroidTier::Small,
                destroyed: true,
            },
        ]);
        assert_eq!(
            audio.player().played,
            vec![
                SoundEffect::Laser,
                SoundEffect::Rocket,
                SoundEffect::Explosion,
                SoundEffect::Crack
            ]
        );
        assert_eq!(audio.player().music, vec![true]);
    }

    #[test]
    fn test_sound_off_suppresses_effects() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        audio.handle_events(&[GameEvent::SoundToggled(false), GameEvent::LaserFired]);
        assert!(audio.player().played.is_empty());
        assert!(!audio.sound_on());

        audio.handle_events(&[GameEvent::SoundToggled(true), GameEvent::LaserFired]);
        assert_eq!(audio.player().played, vec![SoundEffect::Laser]);
    }

    #[test]
    fn test_music_toggle_drives_player() {
        let settings = Settings {
            music_on: false,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), &settings);
        assert!(audio.player().music.is_empty());

        audio.handle_events(&[GameEvent::MusicToggled(true), GameEvent::MusicToggled(false)]);
        assert_eq!(audio.player().music, vec![true, false]);
        assert!(!audio.music_on());
    }
}
