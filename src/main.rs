//! Portfolio FX entry point
//!
//! In the browser this wires every effect to its elements and events. Natively
//! it runs the effects headless and reports what they would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent,
    };

    use portfolio_fx::Settings;
    use portfolio_fx::consts::REVEAL_THRESHOLD;
    use portfolio_fx::persistence::LocalStore;
    use portfolio_fx::platform::{CanvasSurface, clock, dom};
    use portfolio_fx::renderer::Scene;
    use portfolio_fx::sim::{ColumnRain, CursorTracker, Effect, ParticleNetwork, WaveField};
    use portfolio_fx::ui::{RevealTracker, Theme, ThemeToggle, grid_transform, orb_transform};

    // Page contract
    const PLASMA_CANVAS: &str = "plasmaCanvas";
    const RAIN_CANVAS: &str = "matrixCanvas";
    const NETWORK_CANVAS: &str = "networkCanvas";
    const CURSOR_DOT: &str = "cur";
    const CURSOR_TRAIL: &str = "cur-trail";
    const THEME_BUTTON: &str = "themeToggle";
    const THEME_ICON: &str = "themeIcon";
    const THEME_ATTR: &str = "data-theme";
    const HOVER_TARGETS: &str = "a, button";
    const HOVER_CLASS: &str = "lh";
    const REVEAL_SELECTOR: &str = ".reveal";
    const REVEALED_CLASS: &str = "vis";
    const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
    const GRID_SELECTOR: &str = ".h-grid";
    const ORB_SELECTOR: &str = ".orb";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Portfolio FX starting (seed {})", seed);

        // Every feature is optional: a failure disables it and the rest carry on
        if let Err(e) = setup_theme_toggle() {
            log::warn!("Theme toggle disabled: {:?}", e);
        }

        if settings.cursor {
            if let Err(e) = setup_cursor() {
                log::warn!("Custom cursor disabled: {:?}", e);
            }
        }

        if settings.waves {
            if let Err(e) = start_frame_effect(PLASMA_CANVAS, WaveField::new()) {
                log::warn!("Wave field disabled: {:?}", e);
            }
        }

        if settings.rain {
            let rain = ColumnRain::new(seed.wrapping_add(1));
            if let Err(e) = start_timed_effect(RAIN_CANVAS, rain, settings.rain_interval_ms) {
                log::warn!("Column rain disabled: {:?}", e);
            }
        }

        if settings.network {
            let started = start_frame_effect(NETWORK_CANVAS, ParticleNetwork::new(seed.wrapping_add(2)))
                .and_then(track_pointer);
            if let Err(e) = started {
                log::warn!("Particle network disabled: {:?}", e);
            }
        }

        if settings.reveal {
            if let Err(e) = setup_reveal() {
                log::warn!("Reveal on scroll disabled: {:?}", e);
            }
        }

        if settings.parallax {
            if let Err(e) = setup_parallax() {
                log::warn!("Parallax disabled: {:?}", e);
            }
        }

        log::info!("Portfolio FX running");
        Ok(())
    }

    /// Bind an effect to its canvas and keep it sized to the element
    fn bind_effect<E: Effect + 'static>(
        canvas_id: &str,
        effect: E,
    ) -> Result<(Rc<CanvasSurface>, Rc<RefCell<E>>), JsValue> {
        let surface = Rc::new(CanvasSurface::bind(canvas_id)?);
        let effect = Rc::new(RefCell::new(effect));

        let (w, h) = surface.fit();
        effect.borrow_mut().resize(w, h);
        log::info!("#{} bound at {}x{}", canvas_id, w, h);

        {
            let surface = surface.clone();
            let effect = effect.clone();
            dom::listen(&dom::window()?, "resize", move |_: Event| {
                let (w, h) = surface.fit();
                effect.borrow_mut().resize(w, h);
            })?;
        }

        Ok((surface, effect))
    }

    /// Run an effect on the frame clock: tick, then draw
    fn start_frame_effect<E: Effect + Scene + 'static>(
        canvas_id: &str,
        effect: E,
    ) -> Result<Rc<RefCell<E>>, JsValue> {
        let (surface, effect) = bind_effect(canvas_id, effect)?;
        let mut painter = surface.painter();
        let looped = effect.clone();
        clock::every_frame(move |_time| {
            let mut effect = looped.borrow_mut();
            effect.tick();
            effect.draw(&mut painter);
        });
        Ok(effect)
    }

    /// Run an effect on a fixed timer, decoupled from the frame clock
    fn start_timed_effect<E: Effect + Scene + 'static>(
        canvas_id: &str,
        effect: E,
        period_ms: u32,
    ) -> Result<(), JsValue> {
        let (surface, effect) = bind_effect(canvas_id, effect)?;
        let mut painter = surface.painter();
        clock::every_interval(period_ms, move || {
            let mut effect = effect.borrow_mut();
            effect.tick();
            effect.draw(&mut painter);
        })?;
        log::info!("#{} running every {} ms", canvas_id, period_ms);
        Ok(())
    }

    /// Feed document-level pointer moves into the particle network
    fn track_pointer(network: Rc<RefCell<ParticleNetwork>>) -> Result<(), JsValue> {
        dom::listen(&dom::document()?, "mousemove", move |event: MouseEvent| {
            let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            network.borrow_mut().set_pointer(pos);
        })
    }

    fn setup_theme_toggle() -> Result<(), JsValue> {
        let root = dom::document()?
            .document_element()
            .ok_or_else(|| JsValue::from_str("no root element"))?;
        let icon = dom::element_by_id(THEME_ICON);
        let button = dom::html_element_by_id(THEME_BUTTON);

        let mut toggle = ThemeToggle::load(LocalStore::open());
        apply_theme(&root, button.as_ref(), icon.as_ref(), toggle.theme());
        log::info!("Theme restored: {}", toggle.theme().as_str());

        let Some(button) = button else {
            log::warn!("#{} not found, theme cannot be switched", THEME_BUTTON);
            return Ok(());
        };
        let target = button.clone();
        dom::listen(&target, "click", move |_: MouseEvent| {
            let theme = toggle.toggle();
            apply_theme(&root, Some(&button), icon.as_ref(), theme);
        })
    }

    fn apply_theme(root: &Element, button: Option<&HtmlElement>, icon: Option<&Element>, theme: Theme) {
        let view = theme.view();
        let _ = root.set_attribute(THEME_ATTR, view.attribute);
        if let Some(icon) = icon {
            icon.set_text_content(Some(view.icon));
        }
        if let Some(button) = button {
            button.set_title(view.title);
        }
    }

    fn setup_cursor() -> Result<(), JsValue> {
        // Decided once; switching input devices later does not re-enable it
        if dom::prefers_coarse_pointer() {
            log::info!("Touch-primary input, custom cursor disabled");
            return Ok(());
        }
        let (Some(dot), Some(trail)) = (
            dom::html_element_by_id(CURSOR_DOT),
            dom::html_element_by_id(CURSOR_TRAIL),
        ) else {
            log::warn!("Cursor elements missing, custom cursor disabled");
            return Ok(());
        };

        let tracker = Rc::new(RefCell::new(CursorTracker::new()));
        {
            let tracker = tracker.clone();
            dom::listen(&dom::document()?, "mousemove", move |event: MouseEvent| {
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                tracker.borrow_mut().pointer_moved(pos);
                place(&dot, pos);
            })?;
        }

        clock::every_frame(move |_time| {
            let mut tracker = tracker.borrow_mut();
            tracker.tick();
            place(&trail, tracker.trail());
        });

        setup_hover_state()
    }

    fn place(el: &HtmlElement, pos: Vec2) {
        dom::set_style(el, "left", &format!("{}px", pos.x));
        dom::set_style(el, "top", &format!("{}px", pos.y));
    }

    /// Flag the body while the pointer is over a link or button
    fn setup_hover_state() -> Result<(), JsValue> {
        let Some(body) = dom::document()?.body() else {
            return Ok(());
        };
        for el in dom::query_all(HOVER_TARGETS) {
            let entered = body.clone();
            dom::listen(&el, "mouseenter", move |_: Event| {
                let _ = entered.class_list().add_1(HOVER_CLASS);
            })?;
            let left = body.clone();
            dom::listen(&el, "mouseleave", move |_: Event| {
                let _ = left.class_list().remove_1(HOVER_CLASS);
            })?;
        }
        Ok(())
    }

    fn setup_reveal() -> Result<(), JsValue> {
        let elements = dom::query_all(REVEAL_SELECTOR);
        if elements.is_empty() {
            return Ok(());
        }

        let mut tracker = RevealTracker::default();
        for el in &elements {
            let index = tracker.track();
            el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute(REVEAL_INDEX_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    if tracker.enter(index) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
                if tracker.is_complete() {
                    observer.disconnect();
                    log::debug!("All {} reveal targets shown", tracker.len());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        for el in &elements {
            observer.observe(el);
        }
        log::info!("Watching {} reveal targets", elements.len());
        Ok(())
    }

    fn setup_parallax() -> Result<(), JsValue> {
        let window = dom::window()?;
        let grid = dom::query_all_html(GRID_SELECTOR).into_iter().next();
        let orbs = dom::query_all_html(ORB_SELECTOR);
        if grid.is_none() && orbs.is_empty() {
            log::warn!("No parallax elements found");
            return Ok(());
        }

        let scroller = window.clone();
        dom::listen(&window, "scroll", move |_: Event| {
            let y = scroller.scroll_y().unwrap_or(0.0);
            if let Some(grid) = &grid {
                dom::set_style(grid, "transform", &grid_transform(y));
            }
            for (i, orb) in orbs.iter().enumerate() {
                dom::set_style(orb, "transform", &orb_transform(y, i).to_css());
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio FX (native) starting...");
    log::info!("Native mode renders headless - build for wasm32 to see the page effects");

    let mut frames = 120usize;
    let mut json = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => frames = n,
                None => log::warn!("--frames expects a number, keeping {}", frames),
            },
            "--json" => json = true,
            other => log::warn!("Ignoring unknown argument {}", other),
        }
    }

    preview(1280, 720, frames, json);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run every canvas effect headless and log what the last frame drew
#[cfg(not(target_arch = "wasm32"))]
fn preview(width: u32, height: u32, frames: usize, json: bool) {
    use portfolio_fx::renderer::{DrawOp, Recorder, Scene};
    use portfolio_fx::sim::{ColumnRain, Effect, ParticleNetwork, WaveField};

    fn run<E: Effect + Scene>(name: &str, mut effect: E, width: u32, height: u32, frames: usize) -> E {
        let mut recorder = Recorder::new();
        effect.resize(width, height);
        for _ in 0..frames {
            recorder.take();
            effect.tick();
            effect.draw(&mut recorder);
        }
        let paths = recorder.count(|op| matches!(op, DrawOp::FillPath { .. } | DrawOp::StrokePath { .. }));
        let circles = recorder.count(|op| matches!(op, DrawOp::FillCircle { .. }));
        let glyphs = recorder.count(|op| matches!(op, DrawOp::FillText { .. }));
        log::info!(
            "{}: {} ops in last frame ({} paths, {} circles, {} glyphs)",
            name,
            recorder.ops().len(),
            paths,
            circles,
            glyphs
        );
        effect
    }

    let seed = 0x5eed;
    run("wave field", WaveField::new(), width, height, frames);
    run("column rain", ColumnRain::new(seed), width, height, frames);
    let network = run("particle network", ParticleNetwork::new(seed), width, height, frames);
    log::info!(
        "particle network: {} particles, {} links",
        network.particles().len(),
        network.links().len()
    );

    if json {
        match serde_json::to_string_pretty(network.particles()) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("Failed to serialize particles: {}", e),
        }
    }
}
