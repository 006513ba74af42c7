//! Browser host: canvas surface, DOM hud, listeners and the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement,
    KeyboardEvent, Window, window,
};

use crate::config::{CANVAS_HEIGHT, GameConfig, PULSE_MS, Profile};
use crate::game::{GameState, Viewport};
use crate::render::{Asset, Hud, Paint, Shape, Surface};

const CANVAS_ID: &str = "gameCanvas";
const SCORE_ID: &str = "score";
const INSTRUCTIONS_ID: &str = "instructions";
const PULSE_CLASS: &str = "collect-effect";
const HIDDEN_CLASS: &str = "hidden";
/// Used when the window width cannot be read.
const FALLBACK_WIDTH: f64 = 800.0;

// --- Canvas surface ----------------------------------------------------------

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    ship: HtmlImageElement,
    coin: HtmlImageElement,
    fire: HtmlImageElement,
}

impl CanvasSurface {
    fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
        let load = |asset: Asset| -> Result<HtmlImageElement, JsValue> {
            let img = HtmlImageElement::new()?;
            img.set_src(asset.path());
            Ok(img)
        };
        Ok(Self {
            ctx,
            ship: load(Asset::Ship)?,
            coin: load(Asset::Coin)?,
            fire: load(Asset::Fire)?,
        })
    }

    fn image(&self, asset: Asset) -> &HtmlImageElement {
        match asset {
            Asset::Ship => &self.ship,
            Asset::Coin => &self.coin,
            Asset::Fire => &self.fire,
        }
    }
}

impl Surface for CanvasSurface {
    fn draw(&mut self, shape: Shape, (x, y): (f64, f64), paint: Paint) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(paint.alpha);
        ctx.set_fill_style_str(paint.color);
        match shape {
            Shape::Rect { w, h } => ctx.fill_rect(x, y, w, h),
            Shape::Circle { r } => {
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, std::f64::consts::TAU).ok();
                ctx.fill();
            }
            Shape::Triangle { r } => {
                ctx.begin_path();
                ctx.move_to(x + r, y);
                ctx.line_to(x - r, y - r * 0.8);
                ctx.line_to(x - r, y + r * 0.8);
                ctx.close_path();
                ctx.fill();
            }
            Shape::Sprite { asset, w, h } => {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    self.image(asset),
                    x - w / 2.0,
                    y - h / 2.0,
                    w,
                    h,
                )
                .ok();
            }
        }
        ctx.set_global_alpha(1.0);
    }

    // A broken image also reports complete, so require decoded pixels.
    fn is_ready(&self, asset: Asset) -> bool {
        let img = self.image(asset);
        img.complete() && img.natural_width() > 0
    }
}

// --- DOM hud -----------------------------------------------------------------

struct DomHud {
    score: Option<Element>,
    instructions: Option<Element>,
}

impl DomHud {
    fn attach(doc: &Document) -> Self {
        let score = doc.get_element_by_id(SCORE_ID);
        let instructions = doc.get_element_by_id(INSTRUCTIONS_ID);
        if score.is_none() {
            log::warn!("#{} not found; score will not be displayed", SCORE_ID);
        }
        if instructions.is_none() {
            log::warn!("#{} not found; instructions will not be displayed", INSTRUCTIONS_ID);
        }
        Self { score, instructions }
    }
}

impl Hud for DomHud {
    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&format!("Score: {}", score)));
        }
    }

    fn pulse_score(&mut self) {
        let Some(el) = &self.score else { return };
        el.class_list().add_1(PULSE_CLASS).ok();
        let el = el.clone();
        let clear = Closure::once_into_js(move || {
            el.class_list().remove_1(PULSE_CLASS).ok();
        });
        if let Some(w) = window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.unchecked_ref(),
                PULSE_MS,
            );
        }
    }

    fn show_instructions(&mut self, text: &str) {
        if let Some(el) = &self.instructions {
            el.class_list().remove_1(HIDDEN_CLASS).ok();
            el.set_text_content(Some(text));
        }
    }

    fn hide_instructions(&mut self) {
        if let Some(el) = &self.instructions {
            el.class_list().add_1(HIDDEN_CLASS).ok();
        }
    }
}

// --- Host state --------------------------------------------------------------

struct Host {
    canvas: HtmlCanvasElement,
    state: GameState,
    surface: CanvasSurface,
    hud: DomHud,
}

thread_local! {
    static HOST: RefCell<Option<Host>> = const { RefCell::new(None) };
}

fn window_width(win: &Window) -> f64 {
    win.inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(CANVAS_HEIGHT as u32);
}

pub(crate) fn score() -> Option<u32> {
    HOST.with(|h| h.borrow().as_ref().map(|host| host.state.score()))
}

pub(crate) fn start(profile: Profile) -> Result<(), JsValue> {
    if HOST.with(|h| h.borrow().is_some()) {
        log::warn!("game already running; ignoring start");
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Reuse the page's canvas, or create one so the game still runs on a bare page.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let width = window_width(&win);
    size_canvas(&canvas, width);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let seed = js_sys::Date::now() as u64;
    let host = Host {
        canvas,
        state: GameState::new(GameConfig::for_profile(profile), Viewport::new(width), seed),
        surface: CanvasSurface::new(ctx)?,
        hud: DomHud::attach(&doc),
    };
    HOST.with(|h| h.replace(Some(host)));
    log::info!("starfield ready: {} profile, {}px wide, seed {}", profile.as_str(), width, seed);

    // Resize: width follows the window, height stays fixed.
    {
        let closure = Closure::wrap(Box::new(move || {
            let Some(w) = window() else { return };
            let width = window_width(&w);
            HOST.with(|cell| {
                if let Some(host) = cell.borrow_mut().as_mut() {
                    size_canvas(&host.canvas, width);
                    host.state.resize(width);
                }
            });
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key transitions recompute velocity immediately, not per frame.
    for (kind, down) in [("keydown", true), ("keyup", false)] {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            HOST.with(|cell| {
                if let Some(host) = cell.borrow_mut().as_mut() {
                    if down {
                        host.state.key_down(&key);
                    } else {
                        host.state.key_up(&key);
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Any click on the page starts or resets.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            HOST.with(|cell| {
                if let Some(host) = cell.borrow_mut().as_mut() {
                    host.state.click(&mut host.hud);
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_loop();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(w: &Window, f: &FrameCallback) {
    if let Some(cb) = f.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Runs for the life of the page.
fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        HOST.with(|cell| {
            if let Some(host) = cell.borrow_mut().as_mut() {
                host.state.frame(ts, &mut host.surface, &mut host.hud);
            }
        });
        if let Some(w) = window() {
            request_frame(&w, &f);
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        request_frame(&w, &g);
    }
}
