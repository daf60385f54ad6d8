/*
 * Copyright (c):
 * 2025 Gustavo Mondragón
 * gustavms93@gmail.com
 *
 * This file is part of nu-sui.
 *
 * nu-sui is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * nu-sui is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with nu-sui. If not, see <https://www.gnu.org/licenses/>.
 */

mod bike;
mod colour;
mod data;
mod dialog;
mod elements;
mod intro;
mod modal;
mod recommend;
mod technical;
mod text;
mod visual;

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use iced::{theme, window, Alignment, Element, Error, Length, Padding, Sandbox, Settings};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{checkbox, horizontal_rule, scrollable, Button, Column, Container, PickList, Row, Text};
use iced_native::widget::radio;
use rfd::FileDialog;
use tracing::{debug, error, info, span, Level};
use gearing::plot::{render_svg_file, ChartKind, DEFAULT_CHART_SIZE};
use gearing::recommend::recommend;
use gearing::{GearSetup, GearingError, Language};
use bike::{BikeMessage, BikeTab};
use data::ApplicationData;
use dialog::{Dialog, HelpTopic};
use intro::IntroTab;
use modal::Modal;
use recommend::{RecommendMessage, RecommendTab};
use technical::{TechnicalMessage, TechnicalTab};
use text::UiText;
use visual::{VisualMessage, VisualTab};

const HEADER_SIZE: u16 = 32;
const TAB_PADDING: u16 = 16;
const WINDOW_SIZE: (u32, u32) = (1200, 800);

pub(crate) const INTRO_TAB: usize = 0;
pub(crate) const BIKE_TAB: usize = 1;
pub(crate) const VISUAL_TAB: usize = 2;
pub(crate) const RECOMMEND_TAB: usize = 3;
pub(crate) const TECHNICAL_TAB: usize = 4;

static LANGUAGES: [Language; 2] = Language::ALL;

pub fn launch() -> Result<(), Error> {
    UIMain::run(Settings {
        window: window::Settings {
            size: WINDOW_SIZE,
            ..window::Settings::default()
        },
        ..Settings::default()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Beginner,
    Technical
}

impl Mode {
    fn label(&self, text: &UiText) -> &'static str {
        match self {
            Mode::Beginner => text.mode_beginner,
            Mode::Technical => text.mode_technical
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Beginner => write!(f, "beginner"),
            Mode::Technical => write!(f, "technical")
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(usize),
    ModeChanged(Mode),
    DebugToggled(bool),
    LanguageSelected(Language),
    HelpRequested(HelpTopic),
    CloseDialog,
    Bike(BikeMessage),
    VisualizeRequested,
    Visual(VisualMessage),
    Recommend(RecommendMessage),
    Technical(TechnicalMessage),
    ExportRequested(ChartKind),
}

pub struct UIMain {
    app_data: ApplicationData,
    active_tab: usize,
    /// Open dialogs, the last one is shown. Closing it uncovers the one beneath
    dialogs: Vec<Dialog>,
    intro_tab: IntroTab,
    bike_tab: BikeTab,
    visual_tab: VisualTab,
    recommend_tab: RecommendTab,
    technical_tab: TechnicalTab
}

impl UIMain {
    fn with_app_data(app_data: ApplicationData) -> Self {
        let bike_tab = BikeTab::new(&app_data);
        info!("Created bicycle tab");
        let technical_tab = TechnicalTab::new(&app_data);
        info!("Created technical tab");
        UIMain {
            app_data,
            active_tab: INTRO_TAB,
            dialogs: Vec::new(),
            intro_tab: IntroTab,
            bike_tab,
            visual_tab: VisualTab::default(),
            recommend_tab: RecommendTab::default(),
            technical_tab
        }
    }

    pub fn notify_app_data_update(&mut self, update_event: &Message) {
        match self.app_data.settings.write() {
            Ok(_) => { info!("Wrote settings successfully"); }
            Err(e) => { error!("Failed to write settings. {}", e.to_string()); }
        }
        self.bike_tab.app_data_update(&self.app_data, update_event);
        self.visual_tab.app_data_update(&self.app_data, update_event);
        self.recommend_tab.app_data_update(&self.app_data, update_event);
        self.technical_tab.app_data_update(&self.app_data, update_event);
    }

    fn text(&self) -> &'static UiText {
        self.app_data.text()
    }

    fn mode(&self) -> Mode {
        if self.app_data.settings.technical_mode { Mode::Technical } else { Mode::Beginner }
    }

    fn tab_count(&self) -> usize {
        if self.app_data.settings.technical_mode { TECHNICAL_TAB + 1 } else { TECHNICAL_TAB }
    }

    /// Log an unexpected failure and tell the user which action it broke
    fn show_error(&mut self, action: &str, err: &GearingError) {
        error!("Error in {}: {}", action, err);
        let text = self.text();
        self.dialogs.push(Dialog::error(text.error_title, text.error_in(action, &err.to_string())));
    }

    fn rerender_charts(&mut self, action: &str) {
        if let Err(e) = self.app_data.render_charts() {
            self.show_error(action, &e);
        }
    }

    /// Build a setup from the current configuration. Bad input is reported in a warning dialog
    fn current_setup(&mut self, action: &str) -> Option<GearSetup> {
        let text = self.text();
        match self.app_data.build_setup() {
            Ok(setup) => Some(setup),
            Err(GearingError::EmptyDrivetrain) => {
                self.dialogs.push(Dialog::warning(text.insufficient_title, text.insufficient_body));
                None
            }
            Err(e) if e.is_user_error() => {
                info!("Rejected configuration. {}", e);
                self.dialogs.push(Dialog::warning(text.invalid_title, e.to_string()));
                None
            }
            Err(e) => {
                self.show_error(action, &e);
                None
            }
        }
    }

    fn show_setup(&mut self, setup: GearSetup, action: &str) {
        if self.app_data.settings.show_debug {
            debug!("Chain crossing matrix (X = crossing, O = safe)\n{}", setup.crossings());
            for line in setup.crossings().rule.describe(Language::English) {
                debug!("{}", line);
            }
            self.dialogs.push(Dialog::CrossingMatrix);
        }
        self.app_data.setup = Some(setup);
        self.rerender_charts(action);
    }

    fn visualize(&mut self, message: &Message) {
        let span = span!(Level::INFO, "Visualising bicycle");
        let _enter = span.enter();
        let Some(setup) = self.current_setup("visualize_bike") else {
            return;
        };
        self.show_setup(setup, "visualize_bike");
        self.notify_app_data_update(message);
        self.active_tab = VISUAL_TAB;
    }

    fn change_mode(&mut self, mode: Mode, message: &Message) {
        info!("Switching to {} mode", mode);
        self.app_data.settings.technical_mode = mode == Mode::Technical;
        if self.active_tab >= self.tab_count() {
            self.active_tab = INTRO_TAB;
        }
        let refreshed = match mode {
            Mode::Technical if self.app_data.drivetrain.is_some() => self.current_setup("change_mode"),
            _ => None
        };
        match refreshed {
            Some(setup) => self.show_setup(setup, "change_mode"),
            None => self.rerender_charts("change_mode")
        }
        self.notify_app_data_update(message);
    }

    fn update_bike(&mut self, message: BikeMessage) {
        let event = Message::Bike(message.clone());
        match message {
            BikeMessage::BikeSelected(bike_type) => {
                self.app_data.select_bike(bike_type);
                self.notify_app_data_update(&event);
            }
            BikeMessage::WheelSelected(wheel) => {
                self.app_data.settings.wheel_size = wheel;
                self.notify_app_data_update(&event);
            }
            BikeMessage::CadenceChanged(cadence) => {
                self.app_data.settings.cadence = cadence;
                self.notify_app_data_update(&event);
            }
            BikeMessage::ManualConfigRequested => {
                self.bike_tab.update(message, &self.app_data);
                self.dialogs.push(Dialog::ManualConfig);
            }
            BikeMessage::ManualConfigSaved => {
                let text = self.text();
                let saved = self.app_data.set_manual_gears(&self.bike_tab.manual_chainrings,
                                                           &self.bike_tab.manual_sprockets);
                match saved {
                    Ok(_) => {
                        self.dialogs.pop();
                        self.dialogs.push(Dialog::info(text.saved_title, text.saved_body));
                        self.notify_app_data_update(&event);
                    }
                    Err(e) => {
                        info!("Rejected manual gears. {}", e);
                        self.dialogs.push(Dialog::warning(text.config_error_title, e.to_string()));
                    }
                }
            }
            BikeMessage::ManualConfigCancelled => {
                self.dialogs.pop();
            }
            BikeMessage::ChainringsEntered(_) | BikeMessage::SprocketsEntered(_) => {
                self.bike_tab.update(message, &self.app_data);
            }
        }
    }

    fn calculate_recommendation(&mut self) {
        let Some(setup) = self.current_setup("calculate_recommended_gear") else {
            return;
        };
        let conditions = self.recommend_tab.conditions();
        match recommend(&setup, &conditions) {
            Ok(result) => self.recommend_tab.result = result,
            Err(e) => self.show_error("calculate_recommended_gear", &e)
        }
    }

    fn update_power_chart(&mut self) {
        let (Some(chainring), Some(sprocket)) = (self.technical_tab.chainring, self.technical_tab.sprocket) else {
            return;
        };
        if let Err(e) = self.app_data.render_power_chart(chainring, sprocket) {
            self.show_error("update_power_chart", &e);
        }
    }

    fn export_chart(&mut self, kind: ChartKind) {
        let Some(setup) = &self.app_data.setup else {
            return;
        };
        let Some(path) = open_svg_save_dialog(kind) else {
            return;
        };
        let exported = render_svg_file(kind, setup, &self.app_data.chart_options(), DEFAULT_CHART_SIZE, &path);
        let text = self.text();
        match exported {
            Ok(_) => self.dialogs.push(Dialog::info(text.export_title, text.chart_saved(&path.display().to_string()))),
            Err(e) => self.show_error("export_chart", &e)
        }
    }

    fn header(&self) -> Row<'_, Message> {
        let text = self.text();
        let current_mode = self.mode();
        let mode_select = [Mode::Beginner, Mode::Technical].iter().fold(
            Row::new()
                .spacing(15)
                .align_items(Alignment::Center)
                .push(Text::new(text.mode_label)),
            |row, mode| {
                row.push(radio(
                    mode.label(text),
                    *mode,
                    Some(current_mode),
                    Message::ModeChanged)
                    .spacing(3).size(18).text_size(16))
            }
        );
        let debug_checkbox = checkbox(
            text.show_debug,
            self.app_data.settings.show_debug,
            Message::DebugToggled
        ).spacing(3).size(18).text_size(16);
        let language_select = Row::new()
            .spacing(5)
            .align_items(Alignment::Center)
            .push(Text::new(text.language_label))
            .push(PickList::new(&LANGUAGES[..], Some(self.app_data.settings.language), Message::LanguageSelected));
        let help = [
            (text.help_concepts, HelpTopic::Concepts),
            (text.help_usage, HelpTopic::Usage),
            (text.help_about, HelpTopic::About)
        ].into_iter().fold(
            Row::new()
                .spacing(5)
                .align_items(Alignment::Center)
                .push(Text::new(text.help_label)),
            |row, (label, topic)| {
                row.push(Button::new(Text::new(label).size(16))
                    .style(theme::Button::Secondary)
                    .on_press(Message::HelpRequested(topic)))
            }
        );
        Row::new()
            .spacing(30)
            .padding(Padding::from([8, TAB_PADDING]))
            .align_items(Alignment::Center)
            .push(mode_select)
            .push(debug_checkbox)
            .push(language_select)
            .push(help)
    }

    fn tab_titles(&self) -> Vec<&'static str> {
        let text = self.text();
        let mut titles = vec![
            self.intro_tab.title(text),
            self.bike_tab.title(text),
            self.visual_tab.title(text),
            self.recommend_tab.title(text)
        ];
        if self.app_data.settings.technical_mode {
            titles.push(self.technical_tab.title(text));
        }
        titles
    }
}

impl Sandbox for UIMain {
    type Message = Message;

    fn new() -> Self {
        span!(Level::INFO, "Creating UIMain");
        let app_data = ApplicationData::new();
        info!("Initialised settings successfully");
        UIMain::with_app_data(app_data)
    }

    fn title(&self) -> String {
        String::from(self.text().window_title)
    }

    fn update(&mut self, message: Self::Message) {
        match message {
            Message::TabSelected(selected) => {
                if selected < self.tab_count() {
                    self.active_tab = selected;
                }
            }
            Message::ModeChanged(mode) => self.change_mode(mode, &message),
            Message::DebugToggled(show_debug) => {
                self.app_data.settings.show_debug = show_debug;
                self.notify_app_data_update(&message);
            }
            Message::LanguageSelected(language) => {
                info!("Switching language to {}", language);
                self.app_data.settings.language = language;
                self.rerender_charts("change_language");
                self.notify_app_data_update(&message);
            }
            Message::HelpRequested(topic) => self.dialogs.push(Dialog::Help(topic)),
            Message::CloseDialog => {
                self.dialogs.pop();
            }
            Message::Bike(message) => self.update_bike(message),
            Message::VisualizeRequested => self.visualize(&message),
            Message::Visual(message) => self.visual_tab.update(message, &self.app_data),
            Message::Recommend(message) => {
                if let RecommendMessage::CalculateRequested = message {
                    self.calculate_recommendation();
                }
                self.recommend_tab.update(message, &self.app_data);
            }
            Message::Technical(message) => {
                if let TechnicalMessage::UpdatePowerChart = message {
                    self.update_power_chart();
                }
                self.technical_tab.update(message, &self.app_data);
            }
            Message::ExportRequested(kind) => self.export_chart(kind),
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let page_content = match self.active_tab {
            BIKE_TAB => self.bike_tab.view(&self.app_data),
            VISUAL_TAB => self.visual_tab.view(&self.app_data),
            RECOMMEND_TAB => self.recommend_tab.view(&self.app_data),
            TECHNICAL_TAB => self.technical_tab.view(&self.app_data),
            _ => self.intro_tab.view(&self.app_data)
        };
        let page = Column::new()
            .push(self.header())
            .push(Container::new(elements::tab_bar(&self.tab_titles(), self.active_tab, Message::TabSelected))
                .padding(Padding::from([0, TAB_PADDING])))
            .push(horizontal_rule(2))
            .push(page_content);

        match self.dialogs.last() {
            None => page.into(),
            Some(open_dialog) => {
                let mut modal = Modal::new(page, dialog::view(open_dialog, &self.app_data, &self.bike_tab));
                if open_dialog.closes_on_blur() {
                    modal = modal.on_blur(Message::CloseDialog);
                }
                modal.into()
            }
        }
    }
}

fn open_svg_save_dialog(kind: ChartKind) -> Option<PathBuf> {
    let file_name = format!("{}.svg", kind.file_stem());
    FileDialog::new()
        .set_file_name(&file_name)
        .add_filter("SVG", &["svg"])
        .save_file()
}


trait Tab {
    type Message: 'static;

    fn title(&self, text: &UiText) -> &'static str;

    fn heading(&self, text: &UiText) -> &'static str {
        self.title(text)
    }

    fn view<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a
    {
        let column = Column::new()
            .spacing(15)
            .push(Text::new(self.heading(app_data.text())).size(HEADER_SIZE))
            .push(self.content(app_data));

        let page = Container::new(column)
            .width(Length::Fill)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .padding(Padding::from([TAB_PADDING*2, TAB_PADDING, TAB_PADDING, TAB_PADDING]));
        scrollable(page).height(Length::Fill).into()
    }

    fn content<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a;
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use iced::Sandbox;
    use gearing::recommend::recommend;
    use gearing::{BikeType, GearSetup};
    use crate::settings::GlobalSettings;
    use crate::ui::bike::BikeMessage;
    use crate::ui::data::ApplicationData;
    use crate::ui::dialog::{Dialog, NoticeLevel};
    use crate::ui::recommend::RecommendMessage;
    use crate::ui::{Message, Mode, UIMain, INTRO_TAB, TECHNICAL_TAB, VISUAL_TAB};

    fn ui_in(dir: &Path) -> UIMain {
        let settings = GlobalSettings::load_from(dir).unwrap();
        UIMain::with_app_data(ApplicationData::with_settings(settings))
    }

    fn is_warning(dialog: Option<&Dialog>) -> bool {
        matches!(dialog, Some(Dialog::Notice { level: NoticeLevel::Warning, .. }))
    }

    #[test]
    fn technical_mode_shows_configured_bike() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        assert!(ui.app_data.drivetrain.is_some());
        assert!(ui.app_data.setup.is_none());

        ui.update(Message::ModeChanged(Mode::Technical));
        assert!(ui.app_data.settings.technical_mode);
        let setup = ui.app_data.setup.as_ref().unwrap();
        assert_eq!(setup.drivetrain().chainrings(), &[42, 34, 24]);
        assert_eq!(ui.technical_tab.chainring, Some(42));
        assert_eq!(ui.technical_tab.sprocket, Some(20));

        ui.update(Message::TabSelected(TECHNICAL_TAB));
        assert_eq!(ui.active_tab, TECHNICAL_TAB);
        ui.update(Message::ModeChanged(Mode::Beginner));
        assert_eq!(ui.active_tab, INTRO_TAB);

        // The setup follows edits made before switching back
        ui.update(Message::Bike(BikeMessage::CadenceChanged(95)));
        ui.update(Message::ModeChanged(Mode::Technical));
        assert_eq!(ui.app_data.setup.as_ref().unwrap().cadence(), 95);
        assert!(GlobalSettings::load_from(tmp_dir.path()).unwrap().technical_mode);
    }

    #[test]
    fn technical_mode_without_gears_shows_nothing() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        ui.update(Message::Bike(BikeMessage::BikeSelected(BikeType::Custom)));
        ui.update(Message::ModeChanged(Mode::Technical));
        assert!(ui.app_data.setup.is_none());
        assert!(ui.dialogs.is_empty());
    }

    #[test]
    fn visualise_then_recommend_uses_current_cadence() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        ui.update(Message::Bike(BikeMessage::BikeSelected(BikeType::Road)));
        ui.update(Message::VisualizeRequested);
        assert_eq!(ui.active_tab, VISUAL_TAB);
        assert_eq!(ui.app_data.setup.as_ref().unwrap().cadence(), 80);

        ui.update(Message::Bike(BikeMessage::CadenceChanged(100)));
        ui.update(Message::Recommend(RecommendMessage::TargetSpeedChanged(30)));
        ui.update(Message::Recommend(RecommendMessage::CalculateRequested));
        let result = ui.recommend_tab.result.as_ref().unwrap();
        let expected_setup = GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 100).unwrap();
        let expected = recommend(&expected_setup, &ui.recommend_tab.conditions()).unwrap().unwrap();
        assert_eq!(result, &expected);
        // The visualised snapshot is left alone
        assert_eq!(ui.app_data.setup.as_ref().unwrap().cadence(), 80);
    }

    #[test]
    fn recommend_before_visualising() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        ui.update(Message::Recommend(RecommendMessage::CalculateRequested));
        assert!(ui.recommend_tab.result.is_some());
        assert!(ui.dialogs.is_empty());

        ui.update(Message::Bike(BikeMessage::BikeSelected(BikeType::Custom)));
        ui.recommend_tab.result = None;
        ui.update(Message::Recommend(RecommendMessage::CalculateRequested));
        assert!(ui.recommend_tab.result.is_none());
        assert!(is_warning(ui.dialogs.last()));
    }

    #[test]
    fn manual_save_warns_over_the_form() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        ui.update(Message::Bike(BikeMessage::BikeSelected(BikeType::Custom)));
        ui.update(Message::Bike(BikeMessage::ManualConfigRequested));
        assert_eq!(ui.dialogs, vec![Dialog::ManualConfig]);

        ui.update(Message::Bike(BikeMessage::ChainringsEntered("34, x".to_string())));
        ui.update(Message::Bike(BikeMessage::SprocketsEntered("11,13".to_string())));
        ui.update(Message::Bike(BikeMessage::ManualConfigSaved));
        assert_eq!(ui.dialogs.len(), 2);
        assert_eq!(ui.dialogs[0], Dialog::ManualConfig);
        assert!(is_warning(ui.dialogs.last()));
        assert!(ui.app_data.drivetrain.is_none());

        ui.update(Message::CloseDialog);
        assert_eq!(ui.dialogs, vec![Dialog::ManualConfig]);
        ui.update(Message::Bike(BikeMessage::ChainringsEntered("34, 50".to_string())));
        ui.update(Message::Bike(BikeMessage::ManualConfigSaved));
        assert_eq!(ui.dialogs.len(), 1);
        assert!(matches!(ui.dialogs[0], Dialog::Notice { level: NoticeLevel::Info, .. }));
        assert_eq!(ui.app_data.drivetrain.as_ref().unwrap().chainrings(), &[50, 34]);
        assert_eq!(ui.bike_tab.manual_chainrings, "50,34");

        let stored = GlobalSettings::load_from(tmp_dir.path()).unwrap();
        assert_eq!(stored.bike_type, BikeType::Custom);
        assert_eq!(stored.custom_chainrings, "50,34");
        assert_eq!(stored.custom_sprockets, "11,13");
    }

    #[test]
    fn out_of_range_teeth_are_rejected_on_visualise() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut ui = ui_in(tmp_dir.path());
        ui.update(Message::Bike(BikeMessage::BikeSelected(BikeType::Custom)));
        ui.update(Message::VisualizeRequested);
        assert!(is_warning(ui.dialogs.last()));
        ui.update(Message::CloseDialog);

        ui.app_data.set_manual_gears("60", "11").unwrap();
        ui.update(Message::VisualizeRequested);
        assert!(ui.app_data.setup.is_none());
        assert_eq!(ui.active_tab, INTRO_TAB);
        match ui.dialogs.last() {
            Some(Dialog::Notice { level: NoticeLevel::Warning, body, .. }) => assert!(body.contains("60")),
            other => panic!("expected a warning, got {:?}", other)
        }
    }
}
