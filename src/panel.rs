use crate::constants::{
    AXES_TOGGLE_LABEL, PANEL_ID, PANEL_LABEL_WIDTH_PCT, PANEL_ROW_HEIGHT_PX, PANEL_WIDTH_PX,
};
use crate::dom::EventListener;
use galaxy_core::{ColorField, GalaxyParameters, ParamField, ParamRange, Rgb, SceneOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Called with a snapshot of the parameters once an edit completes.
pub type CommitFn = Rc<dyn Fn(&GalaxyParameters)>;

/// The debug panel: one slider plus number box per numeric field, two color
/// pickers and the axes toggle. The box follows the slider on `input`;
/// regeneration waits for `change` on either.
pub struct Panel {
    root: web::HtmlElement,
    _listeners: Vec<EventListener>,
}

impl Panel {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        params: Rc<RefCell<GalaxyParameters>>,
        options: Rc<RefCell<SceneOptions>>,
        on_commit: CommitFn,
    ) -> anyhow::Result<Self> {
        let root: web::HtmlElement = create(document, "div")?;
        root.set_id(PANEL_ID);
        _ = root.set_attribute(
            "style",
            &format!(
                "position:fixed;top:0;right:15px;width:{}px;max-height:100vh;overflow:auto;\
                 background:#1f1f1f;color:#eee;font:11px 'Lucida Grande',sans-serif;\
                 border-radius:0 0 4px 4px;padding:4px 8px;z-index:10;user-select:none",
                PANEL_WIDTH_PX
            ),
        );

        let mut listeners = Vec::new();
        for field in ParamField::ALL {
            let row = number_row(document, field, &params, &on_commit, &mut listeners)?;
            append(&root, &row)?;
        }
        for field in ColorField::ALL {
            let row = color_row(document, field, &params, &on_commit, &mut listeners)?;
            append(&root, &row)?;
        }
        let row = axes_row(document, &options, &mut listeners)?;
        append(&root, &row)?;

        append(parent, &root)?;
        log::info!("[panel] mounted with {} listeners", listeners.len());
        Ok(Self {
            root,
            _listeners: listeners,
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.root
            .style()
            .get_property_value("display")
            .map(|d| d == "none")
            .unwrap_or(false)
    }

    pub fn toggle_visibility(&self) {
        let display = if self.is_hidden() { "" } else { "none" };
        _ = self.root.style().set_property("display", display);
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn number_row(
    document: &web::Document,
    field: ParamField,
    params: &Rc<RefCell<GalaxyParameters>>,
    on_commit: &CommitFn,
    listeners: &mut Vec<EventListener>,
) -> anyhow::Result<web::HtmlElement> {
    let range = field.range();
    let shown = field.format(&params.borrow());
    let (row, slider) = labeled_input(document, field.key(), "range")?;
    bound(&slider, &range, &shown);
    _ = slider.set_attribute("style", "flex:1;min-width:0");

    // Typed entry reaches every step the slider is too coarse for
    let entry: web::HtmlInputElement = create(document, "input")?;
    entry.set_type("number");
    bound(&entry, &range, &shown);
    _ = entry.set_attribute(
        "style",
        "width:64px;background:#303030;color:#2fa1d6;border:none;text-align:right",
    );
    append(&row, &entry)?;

    {
        let slider_live = slider.clone();
        let entry_live = entry.clone();
        listeners.push(EventListener::new(&slider, "input", move |_| {
            if let Ok(raw) = slider_live.value().parse::<f64>() {
                entry_live.set_value(&range.format(range.clamp_snap(raw)));
            }
        })?);
    }
    for source in [&slider, &entry] {
        let source_commit = source.clone();
        let controls = [slider.clone(), entry.clone()];
        let params = params.clone();
        let on_commit = on_commit.clone();
        listeners.push(EventListener::new(source, "change", move |_| {
            let snapshot = {
                let mut p = params.borrow_mut();
                let Some(stored) = field.apply_text(&mut p, &source_commit.value()) else {
                    // Restore the last committed value over bad text
                    let shown = field.format(&p);
                    controls.iter().for_each(|c| c.set_value(&shown));
                    return;
                };
                let shown = range.format(stored);
                controls.iter().for_each(|c| c.set_value(&shown));
                p.clone()
            };
            log::debug!("[panel] {} committed", field.key());
            on_commit(&snapshot);
        })?);
    }
    Ok(row)
}

fn bound(input: &web::HtmlInputElement, range: &ParamRange, value: &str) {
    input.set_min(&range.min.to_string());
    input.set_max(&range.max.to_string());
    input.set_step(&range.step.to_string());
    input.set_value(value);
}

fn color_row(
    document: &web::Document,
    field: ColorField,
    params: &Rc<RefCell<GalaxyParameters>>,
    on_commit: &CommitFn,
    listeners: &mut Vec<EventListener>,
) -> anyhow::Result<web::HtmlElement> {
    let (row, input) = labeled_input(document, field.key(), "color")?;
    input.set_value(&params.borrow().color(field).to_hex());
    _ = input.set_attribute("style", "flex:1;height:20px;border:none;padding:0;background:none");

    let input_commit = input.clone();
    let params = params.clone();
    let on_commit = on_commit.clone();
    listeners.push(EventListener::new(&input, "change", move |_| {
        let color = match Rgb::from_hex(&input_commit.value()) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[panel] {}: {}", field.key(), e);
                return;
            }
        };
        let snapshot = {
            let mut p = params.borrow_mut();
            p.set_color(field, color);
            p.clone()
        };
        on_commit(&snapshot);
    })?);
    Ok(row)
}

fn axes_row(
    document: &web::Document,
    options: &Rc<RefCell<SceneOptions>>,
    listeners: &mut Vec<EventListener>,
) -> anyhow::Result<web::HtmlElement> {
    let (row, input) = labeled_input(document, AXES_TOGGLE_LABEL, "checkbox")?;
    input.set_checked(options.borrow().axes_visible);

    let input_toggle = input.clone();
    let options = options.clone();
    listeners.push(EventListener::new(&input, "change", move |_| {
        options.borrow_mut().axes_visible = input_toggle.checked();
    })?);
    Ok(row)
}

fn labeled_input(
    document: &web::Document,
    label_text: &str,
    input_type: &str,
) -> anyhow::Result<(web::HtmlElement, web::HtmlInputElement)> {
    let row: web::HtmlElement = create(document, "div")?;
    _ = row.set_attribute(
        "style",
        &format!(
            "display:flex;align-items:center;gap:6px;height:{}px;border-bottom:1px solid #2c2c2c",
            PANEL_ROW_HEIGHT_PX
        ),
    );
    let label: web::HtmlElement = create(document, "label")?;
    label.set_text_content(Some(label_text));
    _ = label.set_attribute("style", &format!("width:{}%", PANEL_LABEL_WIDTH_PCT));
    let input: web::HtmlInputElement = create(document, "input")?;
    input.set_type(input_type);
    append(&row, &label)?;
    append(&row, &input)?;
    Ok((row, input))
}

fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("<{}> cast: {:?}", tag, e))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}
