//! Bundled jQuery and jQuery UI resources

use crate::plugin::ResourceReference;

const CORE_SCOPE: &str = "wiquery/core";
const UI_SCOPE: &str = "wiquery/ui";

pub fn jquery_core() -> ResourceReference {
    ResourceReference::javascript(CORE_SCOPE, "jquery/jquery-1.4.4.js")
}

pub fn ui_core() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.core.js")
}

pub fn widget() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.widget.js")
}

pub fn position() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.position.js")
}

pub fn progressbar() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.progressbar.js")
}

pub fn sortable() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.sortable.js")
}

pub fn autocomplete() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "jquery.ui.autocomplete.js")
}

pub fn effects_core() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "effects/jquery.effects.core.js")
}

pub fn blind_effect() -> ResourceReference {
    ResourceReference::javascript(UI_SCOPE, "effects/jquery.effects.blind.js")
}

pub fn theme() -> ResourceReference {
    ResourceReference::stylesheet(UI_SCOPE, "themes/base/jquery-ui.css")
}
