use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    browser::{
        apply_theme, apply_theme_with_transition, local_timestamp, random_unit, smooth_scroll_to,
        system_prefers_dark, viewport_size, BrowserStorage, DomLayout, EmailJsTransport, Interval,
        IntersectionWatch, Timeout, WindowEvents,
    },
    config::SiteConfig,
    contact::{deliver, ContactDesk, SubmitStatus},
    content::{
        skill_group, ProjectFilter, CONTACT_CHANNELS, CUBE_FACES, PROJECTS, SKILL_GROUPS,
        SOCIAL_LINKS,
    },
    controller::ScrollController,
    events::ViewportEvent,
    loading::{LoadingPhase, LoadingScreen, EXIT_DELAY, EXIT_DURATION, LOADING_TICK},
    scroll::ScrollState,
    sections::Section,
    telemetry::{log_event, LogLevel},
    theme::{ThemePreference, ThemeStore},
    visibility::{reachable_threshold, VisibilityFlag, VisibilityPolicy},
};

const SKILL_BAR_DELAY: std::time::Duration = std::time::Duration::from_millis(800);

#[derive(Clone, PartialEq)]
struct ThemeContext {
    theme: ThemePreference,
    toggle: Callback<()>,
}

#[hook]
fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[hook]
fn use_scroll_navigation(config: Rc<SiteConfig>) -> (ScrollState, Callback<Section>) {
    let controller = use_mut_ref(|| ScrollController::from_config(&config));
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let scroll_state = use_state(ScrollState::default);

    {
        let controller = controller.clone();
        let settle_timer = settle_timer.clone();
        let scroll_state = scroll_state.clone();
        use_effect_with((), move |_| {
            let events = WindowEvents::install();
            let subscription = events.as_ref().map(|events| {
                let scroll_state = scroll_state.clone();
                ScrollController::attach(&controller, events.hub(), Rc::new(DomLayout), move |state| {
                    scroll_state.set(state.clone())
                })
            });

            if let Some(events) = events.as_ref() {
                events.hub().emit(&ViewportEvent::Resize);
            }

            move || {
                if let Some(subscription) = subscription {
                    subscription.unsubscribe();
                }
                drop(events);
                settle_timer.borrow_mut().take();
                controller.borrow_mut().cancel_navigation();
            }
        });
    }

    let navigate = {
        let scroll_state = scroll_state.clone();
        Callback::from(move |section: Section| {
            let ticket = controller
                .borrow_mut()
                .navigate_to(section.as_str(), &DomLayout);

            let Some(ticket) = ticket else {
                log_event(
                    config.log_level,
                    LogLevel::Debug,
                    "navigation_ignored",
                    serde_json::json!({ "section": section.as_str() }),
                );
                return;
            };

            log_event(
                config.log_level,
                LogLevel::Debug,
                "navigation_start",
                serde_json::json!({
                    "section": section.as_str(),
                    "scroll_to": ticket.scroll_to,
                    "settle_ms": ticket.settle_after.as_millis() as u64,
                }),
            );
            scroll_state.set(controller.borrow().state().clone());
            smooth_scroll_to(ticket.scroll_to);

            let timer = {
                let controller = controller.clone();
                let scroll_state = scroll_state.clone();
                let log_level = config.log_level;
                Timeout::new(ticket.settle_after, move || {
                    if controller.borrow_mut().settle(&ticket) {
                        scroll_state.set(controller.borrow().state().clone());
                        log_event(
                            log_level,
                            LogLevel::Debug,
                            "navigation_settled",
                            serde_json::json!({ "section": ticket.target.as_str() }),
                        );
                    }
                })
            };
            // Replacing the slot clears the superseded timer.
            *settle_timer.borrow_mut() = timer;
        })
    };

    ((*scroll_state).clone(), navigate)
}

#[hook]
fn use_visibility(node: NodeRef, policy: VisibilityPolicy) -> bool {
    let config = use_site_config();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let element = node.cast::<Element>();
            let (viewport_width, viewport_height) = viewport_size();
            let threshold = element.as_ref().map_or(config.visibility_threshold, |element| {
                reachable_threshold(
                    config.visibility_threshold,
                    f64::from(element.client_height()),
                    viewport_height,
                )
            });
            let flag = Rc::new(RefCell::new(VisibilityFlag::new(policy, threshold)));

            let watch = element.and_then(|element| {
                let flag = flag.clone();
                let visible = visible.clone();
                IntersectionWatch::observe(&element, threshold, move |intersecting, ratio| {
                    let mut flag = flag.borrow_mut();
                    if flag.observe(intersecting, ratio) {
                        visible.set(flag.is_visible());
                    }
                })
            });

            if watch.is_none() && flag.borrow_mut().force_visible() {
                visible.set(true);
            }

            let fallback = if flag
                .borrow()
                .wants_fallback(viewport_width, config.narrow_viewport_px)
            {
                let flag = flag.clone();
                let log_level = config.log_level;
                Timeout::new(config.visibility_fallback, move || {
                    if flag.borrow_mut().force_visible() {
                        visible.set(true);
                        log_event(
                            log_level,
                            LogLevel::Debug,
                            "visibility_fallback_fired",
                            serde_json::json!({ "viewport_width": viewport_width }),
                        );
                    }
                })
            } else {
                None
            };

            move || {
                drop(fallback);
                drop(watch);
            }
        });
    }

    *visible
}

fn reveal_class(visible: bool) -> Classes {
    classes!("reveal", visible.then_some("is-visible"))
}

#[derive(Properties, PartialEq)]
struct LoadingOverlayProps {
    on_complete: Callback<()>,
}

#[function_component(LoadingOverlay)]
fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let screen = use_state(LoadingScreen::default);

    {
        let screen = screen.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with((), move |_| {
            let current = Rc::new(Cell::new(LoadingScreen::default()));
            let exit_timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

            let interval = {
                let exit_timers = exit_timers.clone();
                Interval::new(LOADING_TICK, move || {
                    let mut next = current.get();
                    let phase = next.tick(random_unit());
                    current.set(next);
                    screen.set(next);

                    if phase != LoadingPhase::Complete {
                        return true;
                    }

                    let current = current.clone();
                    let screen = screen.clone();
                    let on_complete = on_complete.clone();
                    let timers = exit_timers.clone();
                    let exit = Timeout::new(EXIT_DELAY, move || {
                        let mut next = current.get();
                        next.start_exit();
                        current.set(next);
                        screen.set(next);

                        let done = Timeout::new(EXIT_DURATION, move || {
                            let mut next = current.get();
                            next.finish();
                            current.set(next);
                            screen.set(next);
                            if next.is_done() {
                                on_complete.emit(());
                            }
                        });
                        timers.borrow_mut().extend(done);
                    });
                    exit_timers.borrow_mut().extend(exit);
                    false
                })
            };

            move || {
                drop(interval);
                exit_timers.borrow_mut().clear();
            }
        });
    }

    html! {
        <div
            class={classes!("loading-overlay", screen.is_exiting().then_some("is-exiting"))}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={screen.rounded_percent().to_string()}
        >
            <div class="loading-mark">{"JL"}</div>
            <div class="loading-track">
                <div class="loading-fill" style={format!("width: {:.1}%;", screen.progress())}></div>
            </div>
            <p class="muted">{format!("{}%", screen.rounded_percent())}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active: Section,
    on_navigate: Callback<Section>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let theme = use_context::<ThemeContext>();
    let menu_open = use_state(|| false);

    let nav_button = |section: Section, mobile: bool| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_navigate.emit(section);
            menu_open.set(false);
        });
        let is_active = props.active == section;

        html! {
            <button
                key={section.as_str()}
                type="button"
                class={classes!(
                    "nav-button",
                    mobile.then_some("nav-button-mobile"),
                    is_active.then_some("is-active")
                )}
                aria-current={is_active.then_some("true")}
                data-section={section.as_str()}
                {onclick}
            >
                {section.label()}
            </button>
        }
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_hire = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    let theme_toggle = theme.map(|theme| {
        let toggle = theme.toggle.clone();
        html! {
            <button
                class="theme-toggle"
                type="button"
                aria-label={theme.theme.toggle_label()}
                aria-pressed={theme.theme.pressed().to_string()}
                onclick={Callback::from(move |_: MouseEvent| toggle.emit(()))}
            >
                <span aria-hidden="true">{theme.theme.icon()}</span>
            </button>
        }
    });

    html! {
        <header class="site-header">
            <div class="header-bar">
                <span class="brand">{"Justine Liwanag"}</span>
                <nav class="nav-desktop" aria-label="Sections">
                    { for Section::ALL.iter().map(|section| nav_button(*section, false)) }
                </nav>
                <div class="header-actions">
                    { theme_toggle.unwrap_or_default() }
                    <button type="button" class="cta" onclick={on_hire}>{"Hire Me"}</button>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-expanded={menu_open.to_string()}
                        aria-label="Toggle navigation"
                        onclick={on_menu_toggle}
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class="nav-mobile" aria-label="Sections">
                    { for Section::ALL.iter().map(|section| nav_button(*section, true)) }
                </nav>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct NavigateProps {
    on_navigate: Callback<Section>,
}

#[function_component(ThreeDBox)]
fn three_d_box() -> Html {
    html! {
        <div class="cube-stage" aria-hidden="true">
            <div class="cube">
                { for CUBE_FACES.iter().map(|face| html! {
                    <div
                        key={face.label}
                        class={classes!("cube-face", format!("cube-face-{}", face.tone))}
                        style={format!("transform: {};", face.transform)}
                    >
                        <span>{face.label}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &NavigateProps) -> Html {
    let to_projects = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Projects))
    };
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    html! {
        <section id={Section::Home.as_str()} class="section hero">
            <div class="hero-copy">
                <p class="badge">{"Available for new opportunities"}</p>
                <h1>{"Frontend "}<span class="accent">{"Developer"}</span></h1>
                <p class="lead">
                    {"I build responsive, accessible web applications with a focus on clean components and smooth interaction."}
                </p>
                <div class="hero-actions">
                    <button type="button" class="cta" onclick={to_projects}>{"View My Work"}</button>
                    <button type="button" class="ghost" onclick={to_contact}>{"Get In Touch"}</button>
                </div>
            </div>
            <ThreeDBox />
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityPolicy::OneShot);

    html! {
        <section id={Section::About.as_str()} ref={node} class={classes!("section", reveal_class(visible))}>
            <h2>{"About Me"}</h2>
            <p>
                {"Frontend developer who enjoys turning designs into fast, maintainable interfaces. "}
                {"Most of my work lives at the seam between product design and component architecture."}
            </p>
            <ul class="stats">
                <li><strong>{"2+"}</strong><span class="muted">{"Years building for the web"}</span></li>
                <li><strong>{PROJECTS.len().to_string()}</strong><span class="muted">{"Showcased projects"}</span></li>
                <li><strong>{SKILL_GROUPS.len().to_string()}</strong><span class="muted">{"Skill areas"}</span></li>
            </ul>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityPolicy::OneShot);
    let filter = use_state(|| ProjectFilter(None));

    html! {
        <section id={Section::Projects.as_str()} ref={node} class={classes!("section", reveal_class(visible))}>
            <h2>{"Featured Projects"}</h2>
            <div class="filters" role="tablist">
                { for ProjectFilter::ALL.iter().map(|candidate| {
                    let candidate = *candidate;
                    let filter_handle = filter.clone();
                    let selected = *filter == candidate;
                    html! {
                        <button
                            key={candidate.id()}
                            type="button"
                            role="tab"
                            aria-selected={selected.to_string()}
                            class={classes!("filter", selected.then_some("is-active"))}
                            onclick={Callback::from(move |_: MouseEvent| filter_handle.set(candidate))}
                        >
                            {candidate.label()}
                            <span class="muted">{format!(" ({})", candidate.count(PROJECTS))}</span>
                        </button>
                    }
                }) }
            </div>
            <ul class="project-grid">
                { for filter.apply(PROJECTS).map(|project| html! {
                    <li key={project.title} class={classes!("project-card", project.featured.then_some("is-featured"))}>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <ul class="tags">
                            { for project.technologies.iter().map(|tech| html! { <li>{*tech}</li> }) }
                        </ul>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityPolicy::OneShot);
    let active_group = use_state(|| SKILL_GROUPS[0].id);
    let bars_ready = use_state(|| false);

    {
        let bars_ready = bars_ready.clone();
        use_effect_with(visible, move |visible| {
            let timer = if *visible {
                Timeout::new(SKILL_BAR_DELAY, move || bars_ready.set(true))
            } else {
                None
            };
            move || drop(timer)
        });
    }

    let group = skill_group(*active_group).unwrap_or(&SKILL_GROUPS[0]);

    html! {
        <section id={Section::Skills.as_str()} ref={node} class={classes!("section", reveal_class(visible))}>
            <h2>{"Skills & Expertise"}</h2>
            <div class="filters" role="tablist">
                { for SKILL_GROUPS.iter().map(|candidate| {
                    let active_group = active_group.clone();
                    let id = candidate.id;
                    let selected = group.id == id;
                    html! {
                        <button
                            key={id}
                            type="button"
                            role="tab"
                            aria-selected={selected.to_string()}
                            class={classes!("filter", selected.then_some("is-active"))}
                            onclick={Callback::from(move |_: MouseEvent| active_group.set(id))}
                        >
                            <span aria-hidden="true">{candidate.icon}</span>{" "}{candidate.title}
                        </button>
                    }
                }) }
            </div>
            <ul class="skill-list">
                { for group.skills.iter().map(|skill| {
                    let width = if *bars_ready { skill.level } else { 0 };
                    html! {
                        <li key={skill.name}>
                            <div class="skill-head">
                                <span>{skill.name}</span>
                                <span class="muted">{format!("{} · {} yrs", skill.proficiency(), skill.years)}</span>
                            </div>
                            <div class="skill-track">
                                <div class="skill-fill" style={format!("width: {width}%;")}></div>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityPolicy::OneShot);
    let desk = use_mut_ref(|| ContactDesk::new(config.status_display));
    let snapshot = use_state(|| desk.borrow().clone());
    let status_timer = use_mut_ref(|| None::<Timeout>);
    let mounted = use_memo((), |_| Cell::new(true));

    {
        let status_timer = status_timer.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                mounted.set(false);
                status_timer.borrow_mut().take();
            }
        });
    }

    let refresh = {
        let desk = desk.clone();
        let snapshot = snapshot.clone();
        Rc::new(move || snapshot.set(desk.borrow().clone()))
    };

    let oninput_field = {
        let desk = desk.clone();
        let refresh = refresh.clone();
        move |name: String, value: String| {
            desk.borrow_mut().update_field(&name, value);
            refresh();
        }
    };

    let oninput = {
        let update = oninput_field.clone();
        Callback::from(move |event: InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            update(target.name(), target.value());
        })
    };

    let oninput_message = {
        let update = oninput_field;
        Callback::from(move |event: InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            update(target.name(), target.value());
        })
    };

    let onsubmit = {
        let desk = desk.clone();
        let refresh = refresh.clone();
        let status_timer = status_timer.clone();
        let mounted = mounted.clone();
        let config = config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if desk.borrow().is_submitting() {
                return;
            }

            let request = desk.borrow_mut().begin_submit(local_timestamp());
            refresh();
            log_event(config.log_level, LogLevel::Info, "contact_submit_start", serde_json::json!({}));

            let desk = desk.clone();
            let refresh = refresh.clone();
            let status_timer = status_timer.clone();
            let mounted = mounted.clone();
            let config = config.clone();
            spawn_local(async move {
                let transport = EmailJsTransport::new(config.emailjs.clone());
                let outcome = deliver(&transport, request).await;

                match &outcome {
                    Ok(()) => log_event(
                        config.log_level,
                        LogLevel::Info,
                        "contact_submit_success",
                        serde_json::json!({}),
                    ),
                    Err(error) => log_event(
                        config.log_level,
                        LogLevel::Warn,
                        "contact_submit_failure",
                        serde_json::json!({ "reason": error.as_str(), "message": error.to_string() }),
                    ),
                }

                if !mounted.get() {
                    return;
                }

                let ticket = desk.borrow_mut().finish_submit(outcome);
                refresh();

                let timer = {
                    let desk = desk.clone();
                    let refresh = refresh.clone();
                    Timeout::new(ticket.clear_after, move || {
                        if desk.borrow_mut().clear_status(&ticket) {
                            refresh();
                        }
                    })
                };
                *status_timer.borrow_mut() = timer;
            });
        })
    };

    let state = &*snapshot;
    let status_banner = match state.status() {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Success => html! {
            <p class="status status-success" role="status">
                {"Message sent! I'll get back to you soon."}
            </p>
        },
        SubmitStatus::Error(message) => html! {
            <p class="status status-error" role="alert">{message.clone()}</p>
        },
    };
    let submit_label = match (state.is_submitting(), state.status()) {
        (true, _) => "Sending...",
        (false, SubmitStatus::Error(_)) => "Try again",
        _ => "Send Message",
    };

    html! {
        <section id={Section::Contact.as_str()} ref={node} class={classes!("section", reveal_class(visible))}>
            <h2>{"Let's Work Together"}</h2>
            <div class="contact-layout">
                <ul class="contact-channels">
                    { for CONTACT_CHANNELS.iter().map(|channel| html! {
                        <li key={channel.title}>
                            <span class="channel-icon" aria-hidden="true">{channel.icon}</span>
                            <a class="link" href={channel.href} target="_blank" rel="noopener noreferrer">
                                <span class="muted">{channel.title}</span>{" "}{channel.value}
                            </a>
                        </li>
                    }) }
                </ul>
                <form class="contact-form" {onsubmit} novalidate=true>
                    <label>
                        {"Name"}
                        <input name="name" type="text" required=true value={state.form().name.clone()} oninput={oninput.clone()} />
                    </label>
                    <label>
                        {"Email"}
                        <input name="email" type="email" required=true value={state.form().email.clone()} oninput={oninput.clone()} />
                    </label>
                    <label>
                        {"Subject"}
                        <input name="title" type="text" required=true value={state.form().subject.clone()} oninput={oninput} />
                    </label>
                    <label>
                        {"Message"}
                        <textarea name="message" rows="6" required=true value={state.form().message.clone()} oninput={oninput_message} />
                    </label>
                    <button type="submit" class="cta" disabled={state.is_submitting()}>{submit_label}</button>
                    {status_banner}
                </form>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &NavigateProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityPolicy::Toggling);
    let year = js_sys::Date::new_0().get_full_year();
    let back_to_top = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Home))
    };

    html! {
        <footer ref={node} class={classes!("site-footer", reveal_class(visible))}>
            <nav aria-label="Quick links">
                { for Section::ALL.iter().map(|section| {
                    let section = *section;
                    let on_navigate = props.on_navigate.clone();
                    html! {
                        <button
                            key={section.as_str()}
                            type="button"
                            class="link"
                            onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
                        >
                            {section.label()}
                        </button>
                    }
                }) }
            </nav>
            <ul class="social-links">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li key={link.name}>
                        <a
                            class="link"
                            href={link.href}
                            aria-label={link.name}
                            target={link.opens_new_tab().then_some("_blank")}
                            rel={link.opens_new_tab().then_some("noopener noreferrer")}
                        >
                            <span aria-hidden="true">{link.icon}</span>{" "}{link.name}
                        </a>
                    </li>
                }) }
            </ul>
            <div class="footer-bottom">
                <p class="muted">{format!("© {year} Justine Liwanag. All rights reserved.")}</p>
                <button type="button" class="link back-to-top" onclick={back_to_top}>
                    {"Back to Top"}<span aria-hidden="true">{" ↑"}</span>
                </button>
            </div>
        </footer>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let config = use_site_config();
    let (scroll, navigate) = use_scroll_navigation(config);

    html! {
        <>
            <div class="scroll-indicator" style={format!("width: {:.2}%;", scroll.progress_percent)} />
            <div class={classes!("nav-transition", scroll.is_transitioning.then_some("active"))} />
            <Header active={scroll.active_section} on_navigate={navigate.clone()} />
            <main id="content">
                <Hero on_navigate={navigate.clone()} />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer on_navigate={navigate} />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_build_env());
    let theme_store = use_mut_ref(|| ThemeStore::load(BrowserStorage, system_prefers_dark()));
    let theme = use_state(|| theme_store.borrow().theme());
    let loading = use_state(|| true);

    {
        let current = *theme;
        let log_level = config.log_level;
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                log_level,
                LogLevel::Info,
                "app_mounted",
                serde_json::json!({ "theme": current.as_str() }),
            );
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        let log_level = config.log_level;
        Callback::from(move |_: ()| {
            let next = theme_store.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(next);
            log_event(
                log_level,
                LogLevel::Debug,
                "theme_toggled",
                serde_json::json!({ "theme": next.as_str() }),
            );
        })
    };

    let on_loading_complete = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    let theme_context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                if *loading {
                    <LoadingOverlay on_complete={on_loading_complete} />
                }
                <div class={classes!("page-shell", loading.then_some("is-loading"))}>
                    <Page />
                </div>
            </ContextProvider<ThemeContext>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
