use crate::{Error, Result, config::FormLayout};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One input of an exclusive-choice group.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioInput {
    pub value: String,
    pub checked: bool,
}

/// The page a form controller is mounted on.
///
/// Reads return `None` or an empty list when the element is absent;
/// writes to an absent element fail with `Error::Surface`.
pub trait Surface: Send + Sync {
    fn radio_group(&self, name: &str) -> Vec<RadioInput>;

    /// Current value of an input or select element.
    fn value(&self, id: &str) -> Option<String>;

    fn contains(&self, id: &str) -> bool;

    fn set_html(&self, id: &str, html: &str) -> Result<()>;

    /// Drops every option of a select element and appends `options` in order.
    fn replace_options(&self, id: &str, options: &[String]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    Select,
    Output,
    Button,
}

#[derive(Debug, Clone)]
struct Element {
    kind: ElementKind,
    value: String,
    options: Vec<String>,
    html: String,
    html_history: Vec<String>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: String::new(),
            options: Vec::new(),
            html: String::new(),
            html_history: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    elements: HashMap<String, Element>,
    radio_groups: HashMap<String, Vec<RadioInput>>,
}

/// A surface kept entirely in memory. Selects behave like their browser
/// counterparts: replacing the options selects the first one, and
/// selecting a value that is not an option leaves the value empty.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the estimator form: area input, location select, output
    /// element, estimate button and both room groups.
    pub fn with_form(layout: &FormLayout) -> Self {
        let surface = Self::new();
        surface.add_element(&layout.sqft_id, ElementKind::Input);
        surface.add_element(&layout.locations_id, ElementKind::Select);
        surface.add_element(&layout.output_id, ElementKind::Output);
        surface.add_element(&layout.estimate_button_id, ElementKind::Button);
        surface.add_radio_group(&layout.bedrooms_group, layout.bedroom_choices.as_slice());
        surface.add_radio_group(&layout.bathrooms_group, layout.bathroom_choices.as_slice());
        surface
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_element(&self, id: &str, kind: ElementKind) {
        self.state()
            .elements
            .insert(id.to_string(), Element::new(kind));
    }

    pub fn add_radio_group<T: ToString>(&self, name: &str, values: &[T]) {
        let inputs = values
            .iter()
            .map(|value| RadioInput {
                value: value.to_string(),
                checked: false,
            })
            .collect();
        self.state().radio_groups.insert(name.to_string(), inputs);
    }

    /// Types into an input, or picks an option of a select.
    pub fn set_value(&self, id: &str, value: &str) -> Result<()> {
        let mut state = self.state();
        let element = state
            .elements
            .get_mut(id)
            .ok_or_else(|| Error::surface(format!("No element with id '{}'", id)))?;

        element.value = match element.kind {
            ElementKind::Select if !element.options.iter().any(|o| o == value) => String::new(),
            _ => value.to_string(),
        };
        Ok(())
    }

    /// Checks the input carrying `value` and unchecks the rest of the group.
    pub fn check(&self, group: &str, value: &str) -> Result<()> {
        let mut state = self.state();
        let inputs = state
            .radio_groups
            .get_mut(group)
            .ok_or_else(|| Error::surface(format!("No radio group named '{}'", group)))?;

        if !inputs.iter().any(|input| input.value == value) {
            return Err(Error::surface(format!(
                "Radio group '{}' has no choice '{}'",
                group, value
            )));
        }

        for input in inputs.iter_mut() {
            input.checked = input.value == value;
        }
        Ok(())
    }

    pub fn uncheck_all(&self, group: &str) {
        if let Some(inputs) = self.state().radio_groups.get_mut(group) {
            for input in inputs.iter_mut() {
                input.checked = false;
            }
        }
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.state().elements.get(id).map(|e| e.html.clone())
    }

    /// Every markup string written to the element, oldest first.
    pub fn html_history(&self, id: &str) -> Vec<String> {
        self.state()
            .elements
            .get(id)
            .map(|e| e.html_history.clone())
            .unwrap_or_default()
    }

    /// The element's markup with tags stripped and entities decoded.
    pub fn text(&self, id: &str) -> Option<String> {
        self.html(id).map(|html| strip_markup(&html))
    }

    pub fn options(&self, id: &str) -> Vec<String> {
        self.state()
            .elements
            .get(id)
            .map(|e| e.options.clone())
            .unwrap_or_default()
    }
}

impl Surface for MemorySurface {
    fn radio_group(&self, name: &str) -> Vec<RadioInput> {
        self.state()
            .radio_groups
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    fn value(&self, id: &str) -> Option<String> {
        self.state().elements.get(id).map(|e| e.value.clone())
    }

    fn contains(&self, id: &str) -> bool {
        self.state().elements.contains_key(id)
    }

    fn set_html(&self, id: &str, html: &str) -> Result<()> {
        let mut state = self.state();
        let element = state
            .elements
            .get_mut(id)
            .ok_or_else(|| Error::surface(format!("No element with id '{}'", id)))?;

        element.html = html.to_string();
        element.html_history.push(html.to_string());
        Ok(())
    }

    fn replace_options(&self, id: &str, options: &[String]) -> Result<()> {
        let mut state = self.state();
        let element = state
            .elements
            .get_mut(id)
            .ok_or_else(|| Error::surface(format!("No element with id '{}'", id)))?;

        if element.kind != ElementKind::Select {
            return Err(Error::surface(format!("Element '{}' is not a select", id)));
        }

        element.options = options.to_vec();
        element.value = options.first().cloned().unwrap_or_default();
        Ok(())
    }
}

fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
