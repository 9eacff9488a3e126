use std::rc::Rc;

use siteui_dom::web::{self, listen, query, query_all, require_id, targets};
use siteui_dom::{
    DomError, LocalStorage, MediaQueryScheme, MemoryStore, PreferenceStore, TimeoutScheduler,
    Viewport, WindowViewport, init_logging,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::page::{
    ActiveNav, DashboardSidebar, HeaderScroll, MobileMenu, ScrollToTop, button_class_name,
};
use crate::theme::ThemeController;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let host = web::window().and_then(|w| web::document(&w).map(|d| (w, d)));
    let (window, document) = match host {
        Ok(pair) => pair,
        Err(e) => {
            web_sys::console::error_1(&format!("siteui: {}", e).into());
            return;
        }
    };

    let loaded = SiteConfig::load_from_document(&document);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => SiteConfig::default(),
    };
    init_logging(config.log_level.to_level_filter());
    match loaded {
        Ok(Some(_)) => log::info!("Loaded page configuration"),
        Ok(None) => log::debug!("No page configuration, using defaults"),
        Err(e) => log::warn!("Ignoring page configuration: {}", e),
    }

    if document.ready_state() == "loading" {
        let init_window = window.clone();
        let init_document = document.clone();
        let result = listen(&document, "DOMContentLoaded", move |_| {
            init_page(&init_window, &init_document, &config);
        });
        if let Err(e) = result {
            log::error!("Failed to wait for DOMContentLoaded: {}", e);
        }
    } else {
        init_page(&window, &document, &config);
    }
}

/// Initialize every page behavior. Each is independent; a failure or a
/// missing element disables only that one.
fn init_page(window: &Window, document: &Document, config: &SiteConfig) {
    report("theme", init_theme(window, document, config));
    report("mobile menu", init_mobile_menu(document, config));
    report("header scroll", init_header_scroll(window, document, config));
    report("active nav", init_active_nav(window, document, config));
    report("scroll-to-top", init_scroll_to_top(window, document, config));
    report("dashboard sidebar", init_dashboard_sidebar(window, document, config));
    log::debug!("Page behaviors initialized");
}

fn report(name: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => {}
        Err(DomError::MissingElement { selector }) => {
            log::debug!("Skipping {}: nothing matches {}", name, selector);
        }
        Err(e) => log::warn!("Failed to initialize {}: {}", name, e),
    }
}

fn init_theme(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let root = document
        .document_element()
        .ok_or_else(|| DomError::missing_element("html"))?;

    let store: Box<dyn PreferenceStore> = match LocalStorage::open(window) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            // Keep toggling working for this page view even without persistence.
            log::warn!("{}; theme choice will not persist", e);
            Box::new(MemoryStore::new())
        }
    };

    let controller = Rc::new(ThemeController::new(root, store, config.theme.clone()));
    controller.resolve_initial_theme(&MediaQueryScheme::new(window.clone()));

    let toggles = query_all(document, &config.theme.toggle_selector)?;
    log::debug!("Binding {} theme toggle(s)", toggles.len());
    for toggle in toggles {
        let controller = controller.clone();
        listen(&toggle, "click", move |_| {
            controller.toggle_theme();
        })?;
    }
    Ok(())
}

fn init_mobile_menu(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let open_button = require_id(document, &config.menu.open_button_id)?;
    let panel = require_id(document, &config.menu.panel_id)?;
    let menu = Rc::new(MobileMenu::new(panel.clone(), &config.menu));

    let on_open = menu.clone();
    listen(&open_button, "click", move |_| on_open.open())?;

    if let Some(close_button) = document.get_element_by_id(&config.menu.close_button_id) {
        let on_close = menu.clone();
        listen(&close_button, "click", move |_| on_close.close())?;
    }

    let backdrop = panel.clone();
    listen(&panel, "click", move |event| {
        menu.on_panel_click(targets(&event, &backdrop));
    })?;
    Ok(())
}

fn init_header_scroll(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), DomError> {
    let header = query(document, &config.header.selector)?
        .ok_or_else(|| DomError::missing_element(config.header.selector.as_str()))?;
    let header = HeaderScroll::new(header, config.header.clone());
    let viewport = WindowViewport::new(window.clone());

    listen(window, "scroll", move |_| header.on_scroll(viewport.scroll_y()))
}

fn init_active_nav(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), DomError> {
    let pathname = window.location().pathname()?;
    let nav = ActiveNav::new(&pathname, config.nav.clone());

    for link in query_all(document, &config.nav.link_selector)? {
        let href = link.get_attribute("href");
        if nav.highlight(&link, href.as_deref()) {
            log::debug!("Active nav link: {}", nav.current());
        }
    }
    Ok(())
}

fn init_scroll_to_top(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), DomError> {
    let body = document.body().ok_or_else(|| DomError::missing_element("body"))?;

    let button = document.create_element("button")?;
    button.set_inner_html(&config.scroll_top.icon_html);
    button.set_id(&config.scroll_top.button_id);
    button.set_class_name(&button_class_name(&config.scroll_top));
    body.append_child(&button)?;

    let viewport = Rc::new(WindowViewport::new(window.clone()));
    let widget = Rc::new(ScrollToTop::new(
        button.clone(),
        viewport.clone(),
        config.scroll_top.clone(),
    ));

    let on_scroll = widget.clone();
    listen(window, "scroll", move |_| on_scroll.on_scroll(viewport.scroll_y()))?;
    listen(&button, "click", move |_| widget.on_click())
}

fn init_dashboard_sidebar(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), DomError> {
    let sidebar_config = &config.sidebar;
    let toggle = query(document, &sidebar_config.toggle_icon_selector)?
        .and_then(|icon| icon.parent_element())
        .ok_or_else(|| DomError::missing_element(sidebar_config.toggle_icon_selector.as_str()))?;
    let sidebar = query(document, &sidebar_config.sidebar_selector)?
        .ok_or_else(|| DomError::missing_element(sidebar_config.sidebar_selector.as_str()))?;

    let overlay = match query(document, &sidebar_config.overlay_selector)? {
        Some(existing) => existing,
        None => {
            let body = document.body().ok_or_else(|| DomError::missing_element("body"))?;
            let created = document.create_element("div")?;
            created.set_class_name(&sidebar_config.overlay_classes);
            body.append_child(&created)?;
            created
        }
    };

    let widget = Rc::new(DashboardSidebar::new(
        sidebar,
        overlay.clone(),
        TimeoutScheduler::new(window.clone()),
        sidebar_config.clone(),
    ));

    let on_toggle = widget.clone();
    listen(&toggle, "click", move |_| on_toggle.on_toggle_click())?;
    listen(&overlay, "click", move |_| widget.on_overlay_click())
}
