use crate::autocomplete::{AutocompleteState, MatchMode, filter_municipalities};
use crate::config::Config;
use crate::geo::{LoadStatus, MunicipalityLoader};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::region::{RegionCode, RegionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    RegionField,
    MunicipalityInput,
}

/// What to print once the terminal is restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Just the municipality name
    Name,
    /// `Name/UF`
    NameWithRegion,
}

pub struct App {
    pub region: RegionState,
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub loader: MunicipalityLoader,
    pub focus: Focus,
    pub match_mode: MatchMode,
    pub max_suggestions: usize,
    pub layout_regions: LayoutRegions,
    pub warning: Option<String>,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Region whose list an input change is still waiting for
    awaiting_suggestions: Option<RegionCode>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            region: RegionState::new(),
            input: InputState::new(),
            autocomplete: AutocompleteState::new(),
            loader: MunicipalityLoader::new(),
            focus: Focus::RegionField,
            match_mode: config.suggestions.matching,
            max_suggestions: config.suggestions.effective_max_results(),
            layout_regions: LayoutRegions::new(),
            warning: None,
            output_mode: None,
            should_quit: false,
            awaiting_suggestions: None,
        };
        app.set_focus(Focus::RegionField);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn municipality(&self) -> &str {
        self.input.text()
    }

    pub fn selected_region(&self) -> Option<RegionCode> {
        self.region.selected()
    }

    /// True while the selected region's list is still being fetched
    pub fn is_loading(&self) -> bool {
        self.region
            .selected()
            .is_some_and(|region| self.loader.is_loading(region))
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus != Focus::RegionField {
            self.region.close();
        }
        self.input.set_focused(focus == Focus::MunicipalityInput);
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            Focus::RegionField => Focus::MunicipalityInput,
            Focus::MunicipalityInput => Focus::RegionField,
        };
        self.set_focus(next);
    }

    /// Open the state list; the suggestion panel gives way to it
    pub fn open_region_list(&mut self) {
        self.region.open();
        self.dismiss_suggestions();
    }

    /// Open the state list if closed, close it if open
    pub fn toggle_region_list(&mut self) {
        self.region.toggle();
        if self.region.is_open() {
            self.dismiss_suggestions();
        }
    }

    /// Hide the panel and drop any render still waiting on a fetch
    pub fn dismiss_suggestions(&mut self) {
        self.autocomplete.hide();
        self.awaiting_suggestions = None;
    }

    /// Commit the highlighted state from the open list
    pub fn commit_region(&mut self) {
        if let Some(region) = self.region.commit() {
            self.on_region_change(region);
        }
    }

    /// Commit the state at a list row
    pub fn commit_region_index(&mut self, index: usize) {
        if let Some(region) = self.region.commit_index(index) {
            self.on_region_change(region);
        }
    }

    /// Select a region programmatically, as if the user had committed it
    pub fn select_region(&mut self, region: RegionCode) {
        if self.region.select(region) {
            self.on_region_change(region);
        }
    }

    /// Reset the municipality field for a newly committed region
    ///
    /// Starts loading the region's list but shows no suggestions until the
    /// user types.
    pub fn on_region_change(&mut self, region: RegionCode) {
        #[cfg(debug_assertions)]
        log::debug!("Region changed to {}", region);

        self.input.clear();
        self.autocomplete.hide();
        self.awaiting_suggestions = None;
        self.loader.request(region);
        self.set_focus(Focus::MunicipalityInput);
    }

    /// Recompute suggestions after the municipality text changed
    pub fn on_municipality_input(&mut self) {
        let Some(region) = self.region.selected() else {
            return;
        };

        match self.loader.request(region) {
            LoadStatus::Ready => {
                self.awaiting_suggestions = None;
                self.refresh_suggestions(region);
            }
            LoadStatus::Pending => {
                self.awaiting_suggestions = Some(region);
            }
        }
    }

    /// Filter the cached list for `region` against the current text
    pub fn refresh_suggestions(&mut self, region: RegionCode) {
        let names = self
            .loader
            .municipalities(region)
            .map(|list| {
                filter_municipalities(
                    list,
                    self.input.text(),
                    self.max_suggestions,
                    self.match_mode,
                )
            })
            .unwrap_or_default();
        self.autocomplete.update_suggestions(names);
    }

    /// Store finished fetches and render the one the input is waiting on
    ///
    /// A response for a region the user has since left is cached but never
    /// rendered.
    pub fn poll_fetch_responses(&mut self) {
        for region in self.loader.poll() {
            if self.awaiting_suggestions == Some(region) && self.region.selected() == Some(region)
            {
                self.awaiting_suggestions = None;
                self.refresh_suggestions(region);
            }
        }
    }

    /// Put the suggestion at `index` into the input and hide the panel
    ///
    /// Not an input change: suggestions are not recomputed.
    pub fn commit_suggestion(&mut self, index: usize) -> bool {
        let Some(name) = self.autocomplete.suggestion_at(index).map(str::to_string) else {
            return false;
        };
        self.input.set_text(&name);
        self.autocomplete.hide();
        true
    }

    /// Commit the keyboard-highlighted suggestion, if any
    pub fn commit_active(&mut self) -> bool {
        match self.autocomplete.active_index() {
            Some(index) => self.commit_suggestion(index),
            None => false,
        }
    }

    /// Finish the session with the typed municipality
    ///
    /// Ignored while the input is empty.
    pub fn confirm(&mut self, mode: OutputMode) {
        if self.input.is_empty() {
            return;
        }
        self.output_mode = Some(mode);
        self.should_quit = true;
    }

    /// Text to print on exit, per the chosen output mode
    pub fn output_text(&self) -> Option<String> {
        let name = self.input.text();
        match self.output_mode? {
            OutputMode::Name => Some(name.to_string()),
            OutputMode::NameWithRegion => Some(match self.region.selected() {
                Some(region) => format!("{}/{}", name, region),
                None => name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
