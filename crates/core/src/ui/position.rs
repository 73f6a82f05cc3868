//! jQuery UI position utility

use crate::error::Result;
use crate::javascript::{JsScope, JsStatement};
use crate::options::{ComplexOption, OptionValue, Options};
use crate::types::MarkupId;
use std::sync::Arc;

/// Alignment point on an element, rendered as `"horizontal vertical"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Bottom,
    Center,
    CenterBottom,
    CenterCenter,
    CenterTop,
    Left,
    LeftBottom,
    LeftCenter,
    LeftTop,
    RightBottom,
    RightCenter,
    RightTop,
    Top,
}

crate::impl_case_insensitive_deserialize!(
    Position,
    Bottom => "bottom",
    Center => "center",
    CenterBottom => "center bottom",
    CenterCenter => "center center",
    CenterTop => "center top",
    Left => "left",
    LeftBottom => "left bottom",
    LeftCenter => "left center",
    LeftTop => "left top",
    RightBottom => "right bottom",
    RightCenter => "right center",
    RightTop => "right top",
    Top => "top",
);

/// What to do when the positioned element overflows the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Fit,
    FitFit,
    FitFlip,
    FitNone,
    Flip,
    FlipFit,
    FlipFlip,
    FlipNone,
    None,
    NoneFit,
    NoneFlip,
    NoneNone,
}

crate::impl_case_insensitive_deserialize!(
    Collision,
    Fit => "fit",
    FitFit => "fit fit",
    FitFlip => "fit flip",
    FitNone => "fit none",
    Flip => "flip",
    FlipFit => "flip fit",
    FlipFlip => "flip flip",
    FlipNone => "flip none",
    None => "none",
    NoneFit => "none fit",
    NoneFlip => "none flip",
    NoneNone => "none none",
);

/// Pixel offset added to the computed position, rendered `'left top'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOffset {
    pub left: i32,
    pub top: i32,
}

impl PositionOffset {
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace().map(str::parse::<i32>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(left)), Some(Ok(top)), None) => Some(Self { left, top }),
            _ => None,
        }
    }
}

impl ComplexOption for PositionOffset {
    fn javascript_option(&self) -> String {
        format!("'{} {}'", self.left, self.top)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PositionOptions {
    options: Options,
}

impl PositionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_at(&mut self, at: Position) -> &mut Self {
        self.options.put("at", at.to_string());
        self
    }

    pub fn at(&self) -> Result<Option<Position>> {
        self.enum_option("at")
    }

    pub fn set_my(&mut self, my: Position) -> &mut Self {
        self.options.put("my", my.to_string());
        self
    }

    pub fn my(&self) -> Result<Option<Position>> {
        self.enum_option("my")
    }

    pub fn set_collision(&mut self, collision: Collision) -> &mut Self {
        self.options.put("collision", collision.to_string());
        self
    }

    pub fn collision(&self) -> Result<Option<Collision>> {
        self.enum_option("collision")
    }

    /// Selector of the element to position against
    pub fn set_of(&mut self, of: impl Into<String>) -> &mut Self {
        self.options.put("of", of.into());
        self
    }

    pub fn of(&self) -> Result<Option<&str>> {
        self.options.get_string("of")
    }

    pub fn set_bgiframe(&mut self, bgiframe: bool) -> &mut Self {
        self.options.put("bgiframe", bgiframe);
        self
    }

    /// Defaults to true when unset
    pub fn is_bgiframe(&self) -> Result<bool> {
        Ok(self.options.get_bool("bgiframe")?.unwrap_or(true))
    }

    pub fn set_offset(&mut self, offset: PositionOffset) -> &mut Self {
        self.options.put_complex("offset", Arc::new(offset));
        self
    }

    pub fn offset(&self) -> Result<Option<PositionOffset>> {
        let rendered = self.options.get_complex("offset")?.map(|o| o.javascript_option());
        Ok(rendered.and_then(|r| PositionOffset::parse(r.trim_matches('\''))))
    }

    /// Callback that moves the element itself, called with the computed `params`
    pub fn set_by(&mut self, body: impl Into<String>) -> &mut Self {
        self.options.put_scope("by", JsScope::with_args(&["params"], body));
        self
    }

    /// `$('#id').position({...});`
    pub fn statement_for(&self, id: &MarkupId) -> JsStatement {
        JsStatement::for_markup(id, None).chain("position", &[&self.options.javascript_options()])
    }

    fn enum_option<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>> {
        Ok(self.options.get_string(key)?.and_then(|s| s.parse().ok()))
    }
}

impl ComplexOption for PositionOptions {
    fn javascript_option(&self) -> String {
        self.options.javascript_options()
    }
}

impl From<PositionOptions> for OptionValue {
    fn from(options: PositionOptions) -> Self {
        OptionValue::Complex(Arc::new(options))
    }
}
