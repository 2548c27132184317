//! Element construction for the collapsible parts.

use uidom::{Align, Edges, Element, Event, Justify, Role};

use super::{
    Collapsible, CollapsibleContent, CollapsibleHeader, CollapsibleTrigger, GAP,
    HEADER_PADDING_X,
};
use crate::error::UiError;
use crate::theme::button_variants;
use crate::widget::{Widget, WidgetResult};

impl Collapsible {
    /// Wrap the rendered parts in the container element.
    ///
    /// Accepts plain elements or the `Option` a part may return; `None`
    /// children are skipped.
    pub fn render<I, E>(&self, children: I) -> Element
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<Element>>,
    {
        Element::col()
            .id(self.shared.native_id.key("collapsible"))
            .role(Role::Presentation)
            .gap(GAP)
            .style(self.style.clone())
            .extend_data(self.data.clone())
            .children(children.into_iter().filter_map(Into::<Option<Element>>::into))
    }
}

impl CollapsibleHeader {
    pub fn render(&self) -> Element {
        Element::row()
            .id(self.id.clone())
            .role(Role::Heading)
            .align(Align::Center)
            .justify(Justify::SpaceBetween)
            .gap(GAP)
            .padding(Edges::horizontal(HEADER_PADDING_X))
            .style(self.style.clone())
            .extend_data(self.data.clone())
            .children(self.children.iter().cloned())
    }
}

impl CollapsibleTrigger {
    pub fn render(&self) -> Result<Element, UiError> {
        let shared = self.shared()?;
        let open = shared.is_open();
        log::trace!("[collapsible {}] render trigger (expanded: {open})", shared.native_id);

        let button = button_variants(self.variant, self.size, Some(&self.style));
        Ok(Element::pressable()
            .id(self.id.clone())
            .native_id(shared.native_id.to_string())
            .aria_expanded(open)
            .disabled(shared.disabled)
            .focusable(!shared.disabled)
            .style(button.style)
            .padding(button.padding)
            .height(button.height)
            .justify(button.justify)
            .align(button.align)
            .extend_data(self.data.clone())
            .children(self.children.iter().cloned()))
    }
}

impl CollapsibleContent {
    /// `Ok(None)` while closed: the region is absent, not merely hidden.
    pub fn render(&self) -> Result<Option<Element>, UiError> {
        let shared = self.shared()?;
        if !shared.is_open() {
            return Ok(None);
        }

        Ok(Some(
            Element::col()
                .id(self.id.clone())
                .role(Role::Summary)
                .aria_labelled_by(shared.native_id.to_string())
                .gap(GAP)
                .enter(shared.content_enter)
                .exit(shared.content_exit)
                .style(self.style.clone())
                .extend_data(self.data.clone())
                .children(self.children.iter().cloned()),
        ))
    }
}

impl Widget for CollapsibleHeader {
    fn id(&self) -> &str {
        &self.id
    }

    fn element(&self) -> Result<Option<Element>, UiError> {
        Ok(Some(self.render()))
    }
}

impl Widget for CollapsibleTrigger {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focusable(&self) -> bool {
        self.shared().map(|s| !s.disabled).unwrap_or(false)
    }

    fn element(&self) -> Result<Option<Element>, UiError> {
        self.render().map(Some)
    }

    fn handle_event(&self, event: &Event) -> Result<WidgetResult, UiError> {
        self.on_event(event).map_err(UiError::from)
    }
}

impl Widget for CollapsibleContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn element(&self) -> Result<Option<Element>, UiError> {
        self.render()
    }
}
