//! Fixed-tick driver and screen state machine
//!
//! The app is always on exactly one [`Screen`]. Menu, controls and pause are
//! modal: while any of them is up the match does not advance. A quit event
//! ends the loop from every screen.

use std::time::Duration;

use crate::audio::{AudioManager, MusicPlayer};
use crate::input::{Key, KeyState};
use crate::settings::Settings;
use crate::sim::animation::{Sprite, sprite_for};
use crate::sim::{MatchState, step};
use crate::ui::{
    Button, ClickTarget, ControlsSheet, Hud, MainMenu, MenuOutcome, PauseMenu, PauseResult,
};

/// Top-level modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Controls,
    Playing,
    Paused,
}

/// Discrete events reported by the platform between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    /// Printable character typed (name entry)
    Text(char),
    Click(ClickTarget),
}

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub screen: Screen,
    pub state: &'a MatchState,
    pub names: &'a [String; 2],
    pub hud: Hud,
    pub sprites: [Sprite; 2],
    pub menu: &'a MainMenu,
    pub pause: &'a PauseMenu,
    pub controls: &'a ControlsSheet,
}

/// Window, input and audio services supplied by the host
pub trait Platform: MusicPlayer {
    /// Events since the last call
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    /// Keys held down right now
    fn held_keys(&self) -> KeyState;
    fn present(&mut self, frame: &Frame<'_>);
    /// Sleep until the next tick is due
    fn wait_for_tick(&mut self, tick: Duration);
}

pub struct GameLoop {
    settings: Settings,
    screen: Screen,
    state: MatchState,
    names: [String; 2],
    menu: MainMenu,
    pause: PauseMenu,
    controls: ControlsSheet,
    audio: AudioManager,
    /// Set by the pause screen or Play Again; consumed on the next tick
    reset_requested: bool,
}

impl GameLoop {
    /// Start on the main menu
    pub fn new(settings: Settings) -> Self {
        Self {
            controls: ControlsSheet::from_controls(&settings.controls),
            audio: AudioManager::new(&settings),
            settings,
            screen: Screen::MainMenu,
            state: MatchState::new(),
            names: [String::new(), String::new()],
            menu: MainMenu::new(),
            pause: PauseMenu::new(),
            reset_requested: false,
        }
    }

    /// Skip the menu and go straight into a match
    pub fn with_names(settings: Settings, names: [String; 2]) -> Self {
        let mut game = Self::new(settings);
        game.start_match(names);
        game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            screen: self.screen,
            state: &self.state,
            names: &self.names,
            hud: Hud::build(&self.state, &self.names),
            sprites: [sprite_for(&self.state.a), sprite_for(&self.state.b)],
            menu: &self.menu,
            pause: &self.pause,
            controls: &self.controls,
        }
    }

    fn start_match(&mut self, names: [String; 2]) {
        log::info!("Match starting: {} vs {}", names[0], names[1]);
        self.names = names;
        self.state.reset();
        self.screen = Screen::Playing;
    }

    /// React to one platform event
    pub fn handle_event(&mut self, event: PlatformEvent) -> Flow {
        if event == PlatformEvent::Quit {
            log::info!("Quit requested on {:?}", self.screen);
            return Flow::Quit;
        }

        match self.screen {
            Screen::MainMenu => self.menu_event(event),
            Screen::Controls => self.controls_event(event),
            Screen::Playing => self.playing_event(event),
            Screen::Paused => self.paused_event(event),
        }
    }

    fn menu_event(&mut self, event: PlatformEvent) -> Flow {
        let outcome = match event {
            PlatformEvent::Click(target) => self.menu.click(target),
            PlatformEvent::KeyDown(key) => self.menu.key(key),
            PlatformEvent::Text(c) => {
                self.menu.text(c);
                MenuOutcome::Stay
            }
            PlatformEvent::Quit => MenuOutcome::Quit,
        };

        match outcome {
            MenuOutcome::Stay => {}
            MenuOutcome::Start(names) => self.start_match(names),
            MenuOutcome::ShowControls => self.screen = Screen::Controls,
            MenuOutcome::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn controls_event(&mut self, event: PlatformEvent) -> Flow {
        match event {
            PlatformEvent::KeyDown(Key::Escape) => return Flow::Quit,
            PlatformEvent::KeyDown(key) if ControlsSheet::is_back_key(key) => {
                self.screen = Screen::MainMenu;
            }
            PlatformEvent::Click(ClickTarget::Button(Button::Back)) => {
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn playing_event(&mut self, event: PlatformEvent) -> Flow {
        match event {
            PlatformEvent::KeyDown(key) if key == self.settings.controls.pause => self.open_pause(),
            PlatformEvent::Click(ClickTarget::Button(Button::Pause)) => self.open_pause(),
            PlatformEvent::Click(ClickTarget::Button(Button::PlayAgain)) if self.state.is_over() => {
                self.reset_requested = true;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn open_pause(&mut self) {
        log::info!("Paused at tick {}", self.state.tick);
        self.pause.open();
        self.screen = Screen::Paused;
    }

    fn paused_event(&mut self, event: PlatformEvent) -> Flow {
        let result = match event {
            PlatformEvent::Click(target) => self.pause.click(target),
            PlatformEvent::KeyDown(key) => self.pause.key(key),
            _ => None,
        };

        match result {
            None => {}
            Some(PauseResult::Quit) => return Flow::Quit,
            Some(PauseResult::Resume) => {
                log::info!("Resumed");
                self.screen = Screen::Playing;
            }
            Some(PauseResult::Reset) => {
                log::info!("Reset chosen from pause");
                self.reset_requested = true;
                self.screen = Screen::Playing;
            }
        }
        Flow::Continue
    }

    /// Advance the match one tick if it is being played
    pub fn tick(&mut self, keys: &KeyState, music: &mut dyn MusicPlayer) {
        if self.screen != Screen::Playing {
            return;
        }

        let mut input = self.settings.controls.tick_input(keys);
        input.reset |= std::mem::take(&mut self.reset_requested);

        step(&mut self.state, &input);

        if input.reset {
            self.audio.restart(music);
        }
        self.audio.update(&self.state, music);
    }

    /// Events, one tick, present
    pub fn run_frame<P: Platform>(&mut self, platform: &mut P) -> Flow {
        for event in platform.poll_events() {
            if self.handle_event(event) == Flow::Quit {
                return Flow::Quit;
            }
        }

        let keys = platform.held_keys();
        self.tick(&keys, platform);
        platform.present(&self.frame());
        Flow::Continue
    }

    /// Run until the platform asks to quit
    pub fn run<P: Platform>(&mut self, platform: &mut P) {
        let tick = Duration::from_millis(self.settings.tick_millis());
        log::info!("Game loop running at {} ticks/s", self.settings.tick_rate);

        while self.run_frame(platform) == Flow::Continue {
            platform.wait_for_tick(tick);
        }
        platform.stop();
        log::info!("Game loop finished after {} ticks", self.state.tick);
    }
}
