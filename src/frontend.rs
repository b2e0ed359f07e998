use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};
use yew::prelude::*;

use crate::config::{RuntimeConfig, ScrollMotion, LOG_LEVEL_ATTRIBUTE, MOUNT_POINT_ID};
use crate::content::{site_content, Contact, FocusArea, Profile, Project, SectionCopy};
use crate::logging::LogLevel;
use crate::page::{locate_region, PageEvent, PageState, Region, SectionExtent};

fn mount_point() -> Option<web_sys::Element> {
    window()?.document()?.get_element_by_id(MOUNT_POINT_ID)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_runtime_config() -> RuntimeConfig {
    let log_level = mount_point().and_then(|root| root.get_attribute(LOG_LEVEL_ATTRIBUTE));
    RuntimeConfig::from_sources(log_level.as_deref(), prefers_reduced_motion())
}

fn section_element(region: Region) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(region.anchor_id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn measure_section(region: Region) -> Option<SectionExtent> {
    let element = section_element(region)?;

    Some(SectionExtent {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn visible_region() -> Option<Region> {
    locate_region(
        scroll_offset(),
        Region::ALL
            .iter()
            .map(|&region| (region, measure_section(region))),
    )
}

fn scroll_to_section(region: Region, motion: ScrollMotion) {
    let Some(element) = section_element(region) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(match motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Instant,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Passive `scroll` listener on the window, removed when dropped.
struct ScrollSubscription {
    target: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    fn register(handler: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let target = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback = Closure::<dyn FnMut()>::new(handler);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self { target, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

impl Reducible for PageState {
    type Action = PageEvent;

    fn reduce(self: Rc<Self>, action: PageEvent) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    brand: AttrValue,
    active: Region,
    menu_open: bool,
    on_navigate: Callback<Region>,
    on_toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let nav_button = |region: Region, class: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let is_active = props.active == region;
        html! {
            <button
                key={region.anchor_id()}
                type="button"
                class={classes!(class, is_active.then_some("is-active"))}
                aria-current={is_active.then_some("true")}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(region))}
            >
                {region.label()}
            </button>
        }
    };

    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let (menu_icon, menu_label) = if props.menu_open {
        ("✕", "Close navigation")
    } else {
        ("☰", "Open navigation")
    };

    html! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <span class="nav-brand">{props.brand.clone()}</span>
                <div class="nav-links">
                    { for Region::ALL.into_iter().map(|region| nav_button(region, "nav-link")) }
                </div>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={menu_label}
                    aria-expanded={props.menu_open.to_string()}
                    aria-controls="mobile-nav"
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{menu_icon}</span>
                </button>
            </div>
            if props.menu_open {
                <div id="mobile-nav" class="mobile-nav">
                    { for Region::ALL.into_iter().map(|region| nav_button(region, "mobile-nav-link")) }
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    profile: &'static Profile,
    copy: &'static SectionCopy,
    on_navigate: Callback<Region>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let go_to = |region: Region| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(region))
    };
    let (profile, copy) = (props.profile, props.copy);

    html! {
        <section id={Region::Home.anchor_id()} class="hero">
            <div class="hero-inner">
                <img class="hero-avatar" src={profile.avatar.as_str()} alt={profile.avatar_alt.as_str()} />
                <h1 class="hero-name">{profile.name.as_str()}</h1>
                <p class="hero-headline">{profile.headline.as_str()}</p>
                <blockquote class="hero-quote">{format!("\u{201c}{}\u{201d}", profile.quote)}</blockquote>
                <div class="hero-actions">
                    <button class="button button-primary" type="button" onclick={go_to(Region::Projects)}>
                        {copy.view_projects.as_str()}
                    </button>
                    <button class="button button-outline" type="button" onclick={go_to(Region::Contact)}>
                        {copy.contact_me.as_str()}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AboutProps {
    profile: &'static Profile,
    copy: &'static SectionCopy,
    focus_areas: &'static [FocusArea],
}

#[function_component(About)]
fn about(props: &AboutProps) -> Html {
    let (profile, copy, focus_areas) = (props.profile, props.copy, props.focus_areas);

    html! {
        <section id={Region::About.anchor_id()} class="section-block" aria-labelledby="about-heading">
            <h2 id="about-heading" class="section-heading">{copy.about_heading.as_str()}</h2>
            <div class="about-grid">
                <div class="about-copy">
                    <p class="about-bio">{profile.bio.as_str()}</p>
                    <p class="about-fact"><span class="about-icon" aria-hidden="true">{"📍"}</span>{profile.location.as_str()}</p>
                    <p class="about-fact"><span class="about-icon" aria-hidden="true">{"🎣"}</span>{profile.hobby.as_str()}</p>
                </div>
                <div class="focus-card">
                    <h3>{copy.focus_heading.as_str()}</h3>
                    <ul class="focus-list">
                        { for focus_areas.iter().map(|area| html! {
                            <li key={area.label.as_str()}>
                                <span class={format!("accent-{}", area.accent)} aria-hidden="true">{"•"}</span>
                                {" "}{area.label.as_str()}
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    live_demo: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let thumbnail = &project.thumbnail;

    html! {
        <article class="project-card">
            <div class="project-thumbnail" style={format!("background: {};", thumbnail.gradient)} aria-hidden="true">
                <div class="project-thumbnail-icon">{thumbnail.icon.as_str()}</div>
                <h4 class="project-thumbnail-title">{thumbnail.title.as_str()}</h4>
                <p class="project-thumbnail-subtitle">{thumbnail.subtitle.as_str()}</p>
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title.as_str()}</h3>
                <p class="project-description">{project.description.as_str()}</p>
                <ul class="tech-list">
                    { for project.tech.iter().map(|tag| html! {
                        <li key={tag.as_str()} class="tech-tag">{tag.as_str()}</li>
                    }) }
                </ul>
                <a class="button button-outline button-small" href={project.live_url.as_str()} target="_blank" rel="noopener noreferrer">
                    <span aria-hidden="true">{"↗ "}</span>
                    {props.live_demo.clone()}
                    <span class="sr-only">{" (opens in a new tab)"}</span>
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ContactProps {
    contact: &'static Contact,
    heading: AttrValue,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactProps) -> Html {
    let contact = props.contact;

    html! {
        <section id={Region::Contact.anchor_id()} class="section-block section-shaded" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-heading">{props.heading.clone()}</h2>
            <p class="contact-blurb">{contact.blurb.as_str()}</p>
            <div class="contact-links">
                <a class="contact-link" href={contact.mailto()}>{"✉ Email"}</a>
                { for contact.profiles.iter().map(|profile| html! {
                    <a
                        key={profile.label.as_str()}
                        class="contact-link"
                        href={profile.url.as_str()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {profile.label.as_str()}
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                }) }
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(resolve_runtime_config);
    let page = use_reducer(PageState::default);
    let logger = config.logger();

    {
        let dispatcher = page.dispatcher();
        use_effect_with((), move |_| {
            let subscription = ScrollSubscription::register(move || {
                dispatcher.dispatch(PageEvent::Scrolled(visible_region()));
            });

            match &subscription {
                Ok(_) => logger.event(LogLevel::Debug, "scroll_listener_registered", json!({})),
                Err(_) => logger.event(LogLevel::Warn, "scroll_listener_unavailable", json!({})),
            }
            logger.event(LogLevel::Info, "page_mounted", json!({ "sections": Region::ALL.len() }));

            move || {
                if subscription.is_ok() {
                    logger.event(LogLevel::Debug, "scroll_listener_released", json!({}));
                }
                drop(subscription);
            }
        });
    }

    use_effect_with(page.active, move |active| {
        logger.event(LogLevel::Debug, "section_activated", json!({ "section": active }));
        || ()
    });

    let on_navigate = {
        let dispatcher = page.dispatcher();
        let motion = config.scroll_motion;
        Callback::from(move |region: Region| {
            logger.event(LogLevel::Debug, "navigation_requested", json!({ "section": region }));
            scroll_to_section(region, motion);
            dispatcher.dispatch(PageEvent::Navigated);
        })
    };

    let on_toggle_menu = {
        let dispatcher = page.dispatcher();
        let menu_open = page.menu_open;
        Callback::from(move |_: ()| {
            logger.event(LogLevel::Debug, "menu_toggled", json!({ "open": !menu_open }));
            dispatcher.dispatch(PageEvent::MenuToggled);
        })
    };

    let site = match site_content() {
        Ok(site) => site,
        Err(error) => {
            logger.event(LogLevel::Warn, "content_invalid", json!({ "error": error.to_string() }));
            return html! {
                <main class="content-error">
                    <p>{"This page could not be loaded. Please try again later."}</p>
                </main>
            };
        }
    };

    html! {
        <>
            <NavBar
                brand={AttrValue::from(site.profile.name.as_str())}
                active={page.active}
                menu_open={page.menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <main>
                <Hero profile={&site.profile} copy={&site.copy} on_navigate={on_navigate} />
                <About profile={&site.profile} copy={&site.copy} focus_areas={site.focus_areas.as_slice()} />
                <section id={Region::Projects.anchor_id()} class="section-block section-shaded" aria-labelledby="projects-heading">
                    <h2 id="projects-heading" class="section-heading">{site.copy.projects_heading.as_str()}</h2>
                    <div class="project-grid">
                        { for site.projects.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard
                                key={index}
                                project={project}
                                live_demo={AttrValue::from(site.copy.live_demo.as_str())}
                            />
                        }) }
                    </div>
                </section>
                <ContactSection
                    contact={&site.contact}
                    heading={AttrValue::from(site.copy.contact_heading.as_str())}
                />
            </main>
            <footer class="site-footer">
                <p>{format!("© {} {}", site.profile.copyright_year, site.profile.name)}</p>
            </footer>
        </>
    }
}

pub fn run() {
    let Some(root) = mount_point() else {
        RuntimeConfig::default().logger().event(
            LogLevel::Warn,
            "mount_point_missing",
            json!({ "id": MOUNT_POINT_ID }),
        );
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
