//! Immutable icon geometry and sizing data.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// SVG `fill-rule` for one draw instruction.
pub enum FillRule {
    /// `nonzero` winding rule.
    #[serde(rename = "nonzero")]
    NonZero,
    /// `evenodd` winding rule.
    #[serde(rename = "evenodd")]
    EvenOdd,
}

impl FillRule {
    /// Attribute value emitted for the rule.
    pub const fn token(self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Alternate coordinate frame (`viewBox`) for icon geometry.
pub struct ViewBox {
    /// Left edge of the frame.
    pub min_x: f32,
    /// Top edge of the frame.
    pub min_y: f32,
    /// Frame width in geometry units.
    pub width: f32,
    /// Frame height in geometry units.
    pub height: f32,
}

impl ViewBox {
    /// Creates a view box from its four components.
    pub const fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl Display for ViewBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One opaque path directive: SVG path data plus an optional fill rule.
pub struct DrawInstruction {
    data: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill_rule: Option<FillRule>,
}

impl DrawInstruction {
    /// Creates an instruction from path data.
    pub fn new(data: impl Into<Cow<'static, str>>) -> Self {
        Self {
            data: data.into(),
            fill_rule: None,
        }
    }

    /// Creates an instruction over static path data, usable in `static` tables.
    pub const fn from_static(data: &'static str, fill_rule: Option<FillRule>) -> Self {
        Self {
            data: Cow::Borrowed(data),
            fill_rule,
        }
    }

    /// Returns the instruction with an explicit fill rule.
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = Some(fill_rule);
        self
    }

    /// Path data (`d`).
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Fill rule, when one was declared.
    pub fn fill_rule(&self) -> Option<FillRule> {
        self.fill_rule
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Geometry and sizing data for one icon.
///
/// Catalog descriptors borrow `'static` data generated at build time; descriptors built at
/// runtime own theirs. Neither form is mutated once rendering starts.
pub struct IconDescriptor {
    name: Cow<'static, str>,
    width: u32,
    height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view_box: Option<ViewBox>,
    default_size: Cow<'static, str>,
    #[serde(default)]
    shapes: Cow<'static, [DrawInstruction]>,
}

impl IconDescriptor {
    /// Creates a descriptor with no geometry yet.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        width: u32,
        height: u32,
        default_size: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            view_box: None,
            default_size: default_size.into(),
            shapes: Cow::Owned(Vec::new()),
        }
    }

    /// Creates a descriptor over static data, usable in `static` tables.
    pub const fn from_static(
        name: &'static str,
        width: u32,
        height: u32,
        view_box: Option<ViewBox>,
        default_size: &'static str,
        shapes: &'static [DrawInstruction],
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            width,
            height,
            view_box,
            default_size: Cow::Borrowed(default_size),
            shapes: Cow::Borrowed(shapes),
        }
    }

    /// Returns the descriptor with an alternate coordinate frame.
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Appends one draw instruction.
    pub fn with_shape(mut self, shape: DrawInstruction) -> Self {
        self.shapes.to_mut().push(shape);
        self
    }

    /// Appends draw instructions in iteration order.
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = DrawInstruction>) -> Self {
        self.shapes.to_mut().extend(shapes);
        self
    }

    /// Icon name within its set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intrinsic pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alternate coordinate frame, if any.
    pub fn view_box(&self) -> Option<ViewBox> {
        self.view_box
    }

    /// Default display size in relative units (for example `1.5rem`).
    pub fn default_size(&self) -> &str {
        &self.default_size
    }

    /// Draw instructions in declaration order.
    pub fn shapes(&self) -> &[DrawInstruction] {
        &self.shapes
    }

    /// Checks the generation-time rules a catalog descriptor must satisfy.
    ///
    /// [`render`](crate::render) never calls this; it exists for tooling and for callers that
    /// assemble descriptors from untrusted data. An empty shape list is valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescriptorError`] found.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if self.width == 0 || self.height == 0 {
            return Err(DescriptorError::ZeroSize {
                name: self.name.to_string(),
            });
        }
        if self.default_size.trim().is_empty() {
            return Err(DescriptorError::EmptyDefaultSize {
                name: self.name.to_string(),
            });
        }
        if let Some(view_box) = self.view_box {
            if !(view_box.width > 0.0 && view_box.height > 0.0) {
                return Err(DescriptorError::InvalidViewBox {
                    name: self.name.to_string(),
                    view_box: view_box.to_string(),
                });
            }
        }
        if let Some(index) = self
            .shapes
            .iter()
            .position(|shape| shape.data().trim().is_empty())
        {
            return Err(DescriptorError::EmptyPathData {
                name: self.name.to_string(),
                index,
            });
        }
        Ok(())
    }
}
