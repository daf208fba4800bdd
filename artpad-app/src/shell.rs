//! DOM construction for the menu and drawing screens.
//!
//! Both screens are built once and toggled with the `hidden` attribute, so
//! every element (and every listener attached to it) lives as long as the app.

use artpad_core::{Mode, Route, SURFACE_HEIGHT, SURFACE_WIDTH};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use crate::error::{AppError, AppResult};
use crate::ui;

/// Handles to the interactive parts of the page.
pub(crate) struct Shell {
    root: Element,
    menu_screen: HtmlElement,
    play_screen: HtmlElement,
    pub(crate) play_link: Element,
    pub(crate) back_button: Element,
    pub(crate) mode_buttons: Vec<(Mode, Element)>,
    pub(crate) clear_button: Element,
    pub(crate) canvas: HtmlCanvasElement,
}

fn create(document: &Document, tag: &str) -> AppResult<Element> {
    document
        .create_element(tag)
        .map_err(|e| AppError::dom(&format!("Failed to create <{tag}>"), &e))
}

fn create_with_text(document: &Document, tag: &str, text: &str) -> AppResult<Element> {
    let element = create(document, tag)?;
    element.set_text_content(Some(text));
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> AppResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| AppError::dom("Failed to append element", &e))
}

fn set_attr(element: &Element, name: &str, value: &str) -> AppResult<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| AppError::dom(&format!("Failed to set {name}"), &e))
}

fn into_html(element: Element) -> AppResult<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom("Element is not an HTML element".to_string()))
}

impl Shell {
    /// Build both screens inside `root`, replacing its contents.
    pub(crate) fn build(document: &Document, root: Element) -> AppResult<Self> {
        root.set_inner_html("");

        // Menu: heading plus a single Play link.
        let menu = create(document, "section")?;
        append(&menu, &create_with_text(document, "h1", ui::MENU_TITLE)?)?;
        let nav = create(document, "nav")?;
        let list = create(document, "ul")?;
        let item = create(document, "li")?;
        let play_link = create_with_text(document, "a", ui::PLAY_LABEL)?;
        set_attr(&play_link, "href", Route::Play.path())?;
        append(&item, &play_link)?;
        append(&list, &item)?;
        append(&nav, &list)?;
        append(&menu, &nav)?;

        // Drawing screen: header with Back, then panel + canvas.
        let play = create(document, "section")?;
        let header = create(document, "header")?;
        let back_button = create_with_text(document, "button", ui::BACK_LABEL)?;
        append(&header, &back_button)?;
        append(&play, &header)?;

        let main = create(document, "main")?;
        let layout = create(document, "div")?;
        set_attr(&layout, "style", ui::LAYOUT_STYLE)?;

        let panel = create(document, "div")?;
        set_attr(&panel, "style", ui::PANEL_STYLE)?;
        append(&panel, &create_with_text(document, "h2", ui::PANEL_TITLE)?)?;
        let mut mode_buttons = Vec::with_capacity(Mode::ALL.len());
        for (mode, label) in ui::mode_buttons() {
            let button = create_with_text(document, "button", label)?;
            set_attr(&button, "data-mode", mode.name())?;
            append(&panel, &button)?;
            mode_buttons.push((mode, button));
        }
        let clear_button = create_with_text(document, "button", ui::CLEAR_LABEL)?;
        append(&panel, &clear_button)?;

        let stage = create(document, "div")?;
        set_attr(&stage, "style", ui::STAGE_STYLE)?;
        let canvas = create(document, "canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Dom("Element is not a canvas".to_string()))?;
        canvas.set_id(ui::CANVAS_ID);
        canvas.set_width(SURFACE_WIDTH);
        canvas.set_height(SURFACE_HEIGHT);
        set_attr(&canvas, "style", ui::CANVAS_STYLE)?;
        append(&stage, &canvas)?;

        append(&layout, &panel)?;
        append(&layout, &stage)?;
        append(&main, &layout)?;
        append(&play, &main)?;

        append(&root, &menu)?;
        append(&root, &play)?;

        Ok(Self {
            root,
            menu_screen: into_html(menu)?,
            play_screen: into_html(play)?,
            play_link,
            back_button,
            mode_buttons,
            clear_button,
            canvas,
        })
    }

    /// Show the screen for `route` and hide the other.
    pub(crate) fn show(&self, route: Route) {
        self.menu_screen.set_hidden(route != Route::Menu);
        self.play_screen.set_hidden(route != Route::Play);
    }

    /// Remove everything the shell added.
    pub(crate) fn unmount(&self) {
        self.root.set_inner_html("");
    }
}
