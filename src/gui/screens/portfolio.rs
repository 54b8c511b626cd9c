//! The portfolio page: one scrollable surface with the hero, about,
//! projects and contact sections, plus the overlays (header, spotlight,
//! collapsed menu, toast, project modal).
//!
//! All ephemeral view state lives here and is mutated only in `update`;
//! recurring work (typewriter ticks, scroll animation frames, pointer and
//! resize events) is expressed as subscriptions recomputed from that
//! state, so tearing the screen down cancels everything pending.

use std::path::PathBuf;
use std::time::Duration;

use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{Space, button, center, column, container, row, scrollable, stack, text};
use iced::{
    Alignment::Center, Color, Element, Event, Font, Length, Point, Size, Subscription, Task,
    event, mouse, window,
};
use iced_aw::Badge;
use rfd::AsyncFileDialog;

use crate::content::{self, Icon, PROJECTS, Project, ProjectImage};
use crate::download;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::{AppState, ViewState, theme, widgets};
use crate::links::{self, ExternalLink};
use crate::nav::{self, ScrollAnimation, Section, SectionMap};
use crate::typing::{Typewriter, TypewriterConfig};

/// Below this window width the nav collapses into the burger menu.
pub const MOBILE_BREAKPOINT: f32 = 760.0;

/// How long the copy-email toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

const TOAST_TEXT: &str = "E-mail copiado para a área de transferência";

const PULSE_RED: Color = Color {
    r: 0.94,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

type Msg = ScreenMessage<PortfolioScreen>;

fn msg(message: PortfolioMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

#[derive(Debug, Clone)]
pub enum PortfolioMessage {
    MenuToggled,
    NavClicked(Section),
    Scrolled {
        offset: f32,
        viewport: f32,
        content: f32,
    },
    ScrollFrame,
    TypewriterTick,
    PointerMoved(Point),
    WindowResized(Size),
    ProjectSelected(u32),
    ModalClosed,
    LinkOpened(ExternalLink),
    CopyEmail,
    ToastExpired(u64),
    DownloadRequested,
    DownloadTargetChosen(Option<PathBuf>),
    DownloadFinished(bool),
}

#[derive(Debug, Clone)]
pub struct PortfolioScreen {
    view_state: ViewState,
    typewriter: Typewriter,
    assets: crate::gui::Assets,
    resume_path: PathBuf,
    window: Size,
    map: SectionMap,
    scroll_y: f32,
    scroll_anim: Option<ScrollAnimation>,
    year: i32,
}

impl PortfolioScreen {
    pub fn new(state: &AppState) -> Self {
        // Corrected by the first resize event the runtime delivers.
        let window = Size::new(1280.0, 860.0);
        Self {
            view_state: ViewState::default(),
            typewriter: Typewriter::new(content::TYPEWRITER_PHRASES, TypewriterConfig::default()),
            assets: state.assets.clone(),
            resume_path: state.config.resume_path(),
            window,
            map: SectionMap::for_viewport(window.height),
            scroll_y: 0.0,
            scroll_anim: None,
            year: time::OffsetDateTime::now_utc().year(),
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn typewriter_text(&self) -> &str {
        self.typewriter.text()
    }

    pub fn scroll_animation(&self) -> Option<&ScrollAnimation> {
        self.scroll_anim.as_ref()
    }

    pub fn section_map(&self) -> &SectionMap {
        &self.map
    }
}

impl Screen for PortfolioScreen {
    type Message = PortfolioMessage;
    type ParentMessage = std::convert::Infallible;

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            PortfolioMessage::MenuToggled => {
                self.view_state.menu_open = !self.view_state.menu_open;
                Task::none()
            }
            PortfolioMessage::NavClicked(section) => {
                self.view_state.menu_open = false;
                let target = nav::scroll_target(&self.map, section);
                self.scroll_anim = Some(ScrollAnimation::new(self.scroll_y, target));
                Task::none()
            }
            PortfolioMessage::ScrollFrame => match &mut self.scroll_anim {
                Some(anim) => {
                    let y = anim.step();
                    if anim.is_done() {
                        self.scroll_anim = None;
                    }
                    iced::widget::operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y })
                }
                None => Task::none(),
            },
            PortfolioMessage::Scrolled {
                offset,
                viewport,
                content,
            } => {
                self.scroll_y = offset;
                self.view_state.scroll_progress = nav::scroll_progress(offset, content, viewport);
                self.view_state.active_section =
                    nav::active_section(&self.map, offset, self.view_state.active_section);
                Task::none()
            }
            PortfolioMessage::TypewriterTick => {
                self.typewriter.tick();
                Task::none()
            }
            PortfolioMessage::PointerMoved(position) => {
                self.view_state.pointer = position;
                Task::none()
            }
            PortfolioMessage::WindowResized(size) => {
                self.window = size;
                self.map = SectionMap::for_viewport(size.height);
                if size.width >= MOBILE_BREAKPOINT {
                    self.view_state.menu_open = false;
                }
                Task::none()
            }
            PortfolioMessage::ProjectSelected(id) => {
                self.view_state.selected_project = Some(id);
                Task::none()
            }
            PortfolioMessage::ModalClosed => {
                self.view_state.selected_project = None;
                Task::none()
            }
            PortfolioMessage::LinkOpened(link) => {
                links::open_external(link);
                Task::none()
            }
            PortfolioMessage::CopyEmail => {
                // The toast fires regardless of whether the write lands.
                let seq = self.view_state.toast.show();
                Task::batch([
                    iced::clipboard::write(links::EMAIL.to_string()),
                    Task::perform(
                        async { tokio::time::sleep(TOAST_DURATION).await },
                        move |_| msg(PortfolioMessage::ToastExpired(seq)),
                    ),
                ])
            }
            PortfolioMessage::ToastExpired(seq) => {
                self.view_state.toast.expire(seq);
                Task::none()
            }
            PortfolioMessage::DownloadRequested => {
                let file_name = self
                    .resume_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "cv.pdf".to_string());
                Task::perform(
                    AsyncFileDialog::new().set_file_name(file_name).save_file(),
                    |handle| {
                        msg(PortfolioMessage::DownloadTargetChosen(
                            handle.map(|file| file.path().to_path_buf()),
                        ))
                    },
                )
            }
            PortfolioMessage::DownloadTargetChosen(None) => Task::none(),
            PortfolioMessage::DownloadTargetChosen(Some(target)) => {
                let source = self.resume_path.clone();
                Task::perform(
                    async move {
                        match download::save_resume(&source, &target).await {
                            Ok(saved) => saved,
                            Err(e) => {
                                tracing::warn!("resume download failed: {e:#}");
                                false
                            }
                        }
                    },
                    |saved| msg(PortfolioMessage::DownloadFinished(saved)),
                )
            }
            PortfolioMessage::DownloadFinished(saved) => {
                if !saved {
                    tracing::debug!("resume download skipped");
                }
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        let mut subscriptions = vec![
            // One rescheduled timer: the period follows the typewriter
            // phase, so a hold waits out the full hold delay.
            iced::time::every(self.typewriter.delay())
                .map(|_| msg(PortfolioMessage::TypewriterTick)),
            event::listen_with(|event, _status, _window| match event {
                Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    Some(PortfolioMessage::PointerMoved(position))
                }
                Event::Window(window::Event::Resized(size)) => {
                    Some(PortfolioMessage::WindowResized(size))
                }
                _ => None,
            })
            .map(msg),
        ];
        if self.scroll_anim.is_some() {
            subscriptions.push(
                iced::time::every(nav::SCROLL_FRAME).map(|_| msg(PortfolioMessage::ScrollFrame)),
            );
        }
        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let compact = self.window.width < MOBILE_BREAKPOINT;

        let page = scrollable(column![
            self.hero(compact),
            self.about(compact),
            self.projects(compact),
            self.contact(compact),
        ])
        .id(page_scroll_id())
        .on_scroll(|viewport: Viewport| {
            msg(PortfolioMessage::Scrolled {
                offset: viewport.absolute_offset().y,
                viewport: viewport.bounds().height,
                content: viewport.content_bounds().height,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<'_, Msg>> = vec![
            page.into(),
            widgets::spotlight(self.view_state.pointer),
            self.header(compact),
        ];
        if compact && self.view_state.menu_open {
            layers.push(self.menu_overlay());
        }
        if self.view_state.toast.visible() {
            layers.push(
                container(widgets::toast(TOAST_TEXT))
                    .center_x(Length::Fill)
                    .height(Length::Fill)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .padding(32)
                    .into(),
            );
        }

        let base = stack(layers).width(Length::Fill).height(Length::Fill);

        match self
            .view_state
            .selected_project
            .and_then(content::project)
        {
            Some(project) => widgets::modal(
                base,
                self.project_modal(project),
                msg(PortfolioMessage::ModalClosed),
            ),
            None => base.into(),
        }
    }
}

impl PortfolioScreen {
    fn side_padding(compact: bool) -> f32 {
        if compact { 24.0 } else { 80.0 }
    }

    fn section<'a>(
        &'a self,
        section: Section,
        body: Element<'a, Msg>,
        compact: bool,
    ) -> Element<'a, Msg> {
        container(body)
            .width(Length::Fill)
            .center_y(Length::Fixed(self.map.height(section)))
            .padding([32.0, Self::side_padding(compact)])
            .into()
    }

    fn header(&self, compact: bool) -> Element<'_, Msg> {
        let wordmark = button(text(content::WORDMARK).size(22))
            .style(theme::nav_button(false))
            .on_press(msg(PortfolioMessage::NavClicked(Section::Hero)));

        let trailing: Element<'_, Msg> = if compact {
            let glyph = if self.view_state.menu_open {
                Icon::Close
            } else {
                Icon::Menu
            };
            button(text(glyph.glyph()).size(20))
                .style(theme::nav_button(self.view_state.menu_open))
                .on_press(msg(PortfolioMessage::MenuToggled))
                .into()
        } else {
            let mut entries = row![].spacing(28).align_y(Center);
            for section in Section::ALL {
                entries = entries.push(self.nav_link(section));
            }
            entries = entries.push(
                button(text("Vamos conversar").size(14))
                    .padding([8.0, 20.0])
                    .style(theme::accent_button)
                    .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::WhatsApp))),
            );
            entries.into()
        };

        let bar = container(
            row![wordmark, horizontal_space(), trailing]
                .align_y(Center)
                .padding([0.0, 24.0]),
        )
        .width(Length::Fill)
        .height(Length::Fixed(nav::HEADER_HEIGHT - 2.0))
        .style(theme::header);

        // Thin accent line tracking scroll progress.
        let progress = container(Space::new()
            .width(Length::Fixed(self.window.width * self.view_state.scroll_progress))
            .height(Length::Fixed(2.0)))
        .style(|_: &iced::Theme| container::Style {
            background: Some(theme::ACCENT.into()),
            ..container::Style::default()
        });

        column![progress, bar].into()
    }

    fn nav_link(&self, section: Section) -> Element<'_, Msg> {
        let active = self.view_state.active_section == section;
        button(text(section.label()).size(13))
            .style(theme::nav_button(active))
            .on_press(msg(PortfolioMessage::NavClicked(section)))
            .into()
    }

    fn menu_overlay(&self) -> Element<'_, Msg> {
        let mut entries = column![].spacing(20).align_x(Center).width(Length::Fill);
        for section in Section::ALL {
            entries = entries.push(self.nav_link(section));
        }
        entries = entries.push(
            button(
                row![
                    text(Icon::Smartphone.glyph()).color(theme::ACCENT),
                    text("WhatsApp").size(16).color(theme::ACCENT)
                ]
                .spacing(8),
            )
            .style(theme::nav_button(false))
            .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::WhatsApp))),
        );

        column![
            Space::new().width(Length::Fill).height(Length::Fixed(nav::HEADER_HEIGHT)),
            container(entries)
                .width(Length::Fill)
                .padding(24)
                .style(theme::menu_panel),
        ]
        .into()
    }

    fn hero(&self, compact: bool) -> Element<'_, Msg> {
        let availability = row![
            text("●").size(10).color(theme::ACCENT),
            text(content::AVAILABILITY)
                .size(13)
                .font(Font::MONOSPACE)
                .color(theme::ACCENT),
        ]
        .spacing(8)
        .align_y(Center);

        let name_size = if compact { 58.0 } else { 104.0 };
        let name = column![
            text(content::FIRST_NAME).size(name_size),
            text(content::LAST_NAME).size(name_size).color(theme::ACCENT),
        ];

        let typed = row![
            text(self.typewriter.text()).size(22),
            text("▌").size(22).color(theme::ACCENT),
        ];

        let lede = text("Do rigor do SAP ABAP à criatividade do Frontend Moderno.")
            .size(18)
            .color(theme::MUTED);

        let ctas = row![
            button(text("Ver Projetos  →").size(15))
                .padding([14.0, 28.0])
                .style(theme::accent_button)
                .on_press(msg(PortfolioMessage::NavClicked(Section::Projects))),
            button(text("▯  WhatsApp").size(15))
                .padding([14.0, 28.0])
                .style(theme::ghost_button)
                .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::WhatsApp))),
            button(text("↓  Baixar CV").size(15))
                .padding([14.0, 28.0])
                .style(theme::ghost_button)
                .on_press(msg(PortfolioMessage::DownloadRequested)),
        ]
        .spacing(12);

        let intro = column![availability, name, typed, lede, ctas]
            .spacing(20)
            .max_width(640);

        let body: Element<'_, Msg> = if compact {
            intro.into()
        } else {
            row![intro, horizontal_space(), self.portrait()]
                .align_y(Center)
                .into()
        };

        self.section(Section::Hero, body, compact)
    }

    fn portrait(&self) -> Element<'_, Msg> {
        match &self.assets.portrait {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fixed(400.0))
                .height(Length::Fixed(500.0))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => container(
                column![
                    text("RP").size(96).color(theme::ACCENT),
                    text("retrato").size(12).font(Font::MONOSPACE).color(theme::MUTED),
                ]
                .spacing(8)
                .align_x(Center),
            )
            .center_x(Length::Fixed(400.0))
            .center_y(Length::Fixed(500.0))
            .style(theme::panel)
            .into(),
        }
    }

    fn about(&self, compact: bool) -> Element<'_, Msg> {
        let heading = column![
            text("ENGENHARIA").size(48),
            text("+ DESIGN.").size(48).color(theme::ACCENT),
        ];

        let first = text(
            "Minha base em SAP ABAP me ensinou a lidar com sistemas críticos onde o erro \
             não é uma opção. Agora, aplico essa solidez no desenvolvimento Web.",
        )
        .size(17)
        .color(theme::MUTED);
        let second = text(
            "Não crio apenas telas bonitas; crio interfaces estruturadas, performáticas \
             e prontas para escalar.",
        )
        .size(15);

        let mut badges = row![].spacing(16);
        for badge in &content::TECH_BADGES {
            badges = badges.push(
                container(
                    column![
                        text(badge.icon.glyph()).size(20).color(theme::ACCENT),
                        text(badge.name).size(16),
                        text(badge.stack).size(13).color(theme::MUTED),
                    ]
                    .spacing(6),
                )
                .padding(20)
                .width(Length::Fill)
                .style(theme::panel),
            );
        }

        let left = column![heading, first, second, badges]
            .spacing(20)
            .max_width(620);

        let year_card = container(
            column![
                text(self.year.to_string()).size(56),
                text("Pronto para transformar requisitos complexos em experiências digitais fluidas.")
                    .size(15)
                    .color(theme::MUTED),
            ]
            .spacing(12),
        )
        .padding(32)
        .max_width(400)
        .style(theme::panel);

        let body: Element<'_, Msg> = if compact {
            column![left, year_card].spacing(32).into()
        } else {
            row![left, horizontal_space(), year_card]
                .align_y(Center)
                .into()
        };

        self.section(Section::About, body, compact)
    }

    fn projects(&self, compact: bool) -> Element<'_, Msg> {
        let heading = row![
            column![
                text("PROJETOS").size(48),
                text("SELECIONADOS").size(48).color(theme::ACCENT),
            ],
            horizontal_space(),
            text("Clique nos cards →").size(15).color(theme::MUTED),
        ]
        .align_y(iced::alignment::Vertical::Bottom);

        let mut body = column![heading].spacing(56);
        for (index, project) in PROJECTS.iter().enumerate() {
            body = body.push(self.project_row(project, index % 2 == 1, compact));
        }

        self.section(Section::Projects, body.into(), compact)
    }

    fn project_row(
        &self,
        project: &'static Project,
        flipped: bool,
        compact: bool,
    ) -> Element<'_, Msg> {
        let visual = button(self.project_visual(project))
            .padding(0)
            .style(theme::card_button)
            .on_press(msg(PortfolioMessage::ProjectSelected(project.id)));

        let mut pills = row![].spacing(8);
        for tech in project.tech {
            pills = pills.push(widgets::tech_pill(*tech));
        }

        let info = column![
            row![
                accent_rule(32.0, 1.0, theme::ACCENT),
                text(project.category).size(13).color(theme::ACCENT),
            ]
            .spacing(10)
            .align_y(Center),
            text(project.title).size(32),
            text(project.short_desc).size(16).color(theme::MUTED),
            pills,
            button(text("LER ESTUDO DE CASO  →").size(13))
                .style(theme::nav_button(false))
                .on_press(msg(PortfolioMessage::ProjectSelected(project.id))),
        ]
        .spacing(14)
        .max_width(420);

        if compact {
            column![visual, info].spacing(20).into()
        } else if flipped {
            row![info, horizontal_space(), visual]
                .align_y(Center)
                .into()
        } else {
            row![visual, horizontal_space(), info]
                .align_y(Center)
                .into()
        }
    }

    fn project_visual(&self, project: &'static Project) -> Element<'_, Msg> {
        match project.image {
            ProjectImage::Img { .. } => match self.assets.project_image(project.id) {
                Some(handle) => iced::widget::image(handle.clone())
                    .width(Length::Fixed(560.0))
                    .height(Length::Fixed(400.0))
                    .content_fit(iced::ContentFit::Cover)
                    .into(),
                None => container(
                    column![
                        text(project.title).size(28),
                        text(project.category)
                            .size(12)
                            .font(Font::MONOSPACE)
                            .color(theme::MUTED),
                    ]
                    .spacing(8)
                    .align_x(Center),
                )
                .center_x(Length::Fixed(560.0))
                .center_y(Length::Fixed(400.0))
                .style(theme::panel)
                .into(),
            },
            ProjectImage::CustomUi => self.dashboard_mock(),
        }
    }

    /// Drawn stand-in for the fleet dashboard screenshot.
    fn dashboard_mock(&self) -> Element<'_, Msg> {
        let topbar = container(
            row![
                row![
                    text("●").size(10).color(PULSE_RED),
                    text("LIVE TRACKING").size(11).font(Font::MONOSPACE),
                ]
                .spacing(8)
                .align_y(Center),
                horizontal_space(),
                text("SYS.VANGUARD_V2")
                    .size(11)
                    .font(Font::MONOSPACE)
                    .color(theme::ACCENT),
            ]
            .align_y(Center),
        )
        .padding([10.0, 14.0])
        .width(Length::Fill)
        .style(theme::panel);

        let mut fleet = column![].spacing(10);
        for _ in 0..3 {
            fleet = fleet.push(
                container(
                    row![
                        text(Icon::Truck.glyph()).size(14),
                        horizontal_space(),
                        text("●").size(8).color(theme::ACCENT),
                    ]
                    .align_y(Center),
                )
                .padding(8)
                .width(Length::Fill)
                .style(theme::panel),
            );
        }
        let sidebar = container(fleet)
            .padding(12)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(theme::panel);

        let map = container(center(text(Icon::MapPin.glyph()).size(40)))
            .width(Length::FillPortion(2))
            .height(Length::Fill)
            .style(theme::panel);

        container(
            column![topbar, row![sidebar, map].spacing(12).height(Length::Fill)].spacing(12),
        )
        .padding(16)
        .width(Length::Fixed(560.0))
        .height(Length::Fixed(400.0))
        .style(theme::panel)
        .into()
    }

    fn contact(&self, compact: bool) -> Element<'_, Msg> {
        let headline_size = if compact { 56.0 } else { 96.0 };
        let main = column![
            text("PRONTO PARA INICIAR?")
                .size(14)
                .font(Font::MONOSPACE)
                .color(theme::ACCENT),
            text("VAMOS").size(headline_size),
            text("CONVERSAR.").size(headline_size).color(theme::ACCENT),
            text("Seja para migrar sistemas legados ou criar novas experiências digitais.")
                .size(18)
                .color(theme::MUTED),
            row![
                button(text("▯  Chamar no WhatsApp").size(16))
                    .padding([16.0, 32.0])
                    .style(theme::accent_button)
                    .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::WhatsApp))),
                button(text("✉  Enviar E-mail").size(16))
                    .padding([16.0, 32.0])
                    .style(theme::ghost_button)
                    .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::Mail))),
                button(text("Copiar e-mail").size(16))
                    .padding([16.0, 32.0])
                    .style(theme::ghost_button)
                    .on_press(msg(PortfolioMessage::CopyEmail)),
            ]
            .spacing(16),
        ]
        .spacing(18)
        .align_x(Center);

        let footer = row![
            column![
                text(content::WORDMARK).size(18),
                text(format!("Rafael Padilha © {}", self.year))
                    .size(13)
                    .color(theme::MUTED),
            ]
            .spacing(4),
            horizontal_space(),
            row![
                button(text(Icon::Instagram.glyph()).size(18))
                    .style(theme::nav_button(false))
                    .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::Instagram))),
                button(text(Icon::Linkedin.glyph()).size(18))
                    .style(theme::nav_button(false))
                    .on_press(msg(PortfolioMessage::LinkOpened(ExternalLink::Linkedin))),
            ]
            .spacing(12),
        ]
        .align_y(Center);

        let body = column![
            container(main)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            footer,
        ]
        .height(Length::Fill);

        self.section(Section::Contact, body.into(), compact)
    }

    fn project_modal(&self, project: &'static Project) -> Element<'_, Msg> {
        let header = row![
            container(text(project.category).size(12).color(theme::ACCENT))
                .padding([4.0, 10.0])
                .style(theme::pill),
            horizontal_space(),
            button(text(Icon::Close.glyph()).size(20))
                .style(theme::nav_button(false))
                .on_press(msg(PortfolioMessage::ModalClosed)),
        ]
        .align_y(Center);

        let study = &project.full_description;
        let mut badges = row![].spacing(8);
        for tech in project.tech {
            badges = badges.push(Badge::new(text(*tech).size(12)));
        }

        container(
            column![
                header,
                text(project.title).size(40),
                case_block("O Desafio", study.challenge, theme::ACCENT),
                case_block("A Solução", study.solution, theme::MUTED),
                case_block("O Resultado", study.result, Color::WHITE),
                text("TECNOLOGIAS:").size(12).color(theme::MUTED),
                badges,
            ]
            .spacing(20),
        )
        .padding(36)
        .max_width(760)
        .style(theme::modal_card)
        .into()
    }
}

fn accent_rule<'a>(width: f32, height: f32, color: Color) -> Element<'a, Msg> {
    container(Space::new().width(Length::Fixed(width)).height(Length::Fixed(height)))
        .style(move |_: &iced::Theme| container::Style {
            background: Some(color.into()),
            ..container::Style::default()
        })
        .into()
}

fn case_block(label: &'static str, body: &'static str, marker: Color) -> Element<'static, Msg> {
    column![
        row![
            accent_rule(4.0, 24.0, marker),
            text(label).size(18),
        ]
        .spacing(10)
        .align_y(Center),
        text(body).size(15).color(theme::MUTED),
    ]
    .spacing(8)
    .into()
}
