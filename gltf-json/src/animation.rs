use crate::validation::{Checked, Error, Validate};
use crate::{accessor, extras::Extras, scene, Asset, Index, Path};
use gltf_derive::Validate;

/// Specifies an interpolation algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interpolation {
    /// Linear interpolation.
    Linear,
    /// Step interpolation.
    Step,
    /// Cubic spline interpolation.
    CubicSpline,
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Linear
    }
}

impl Validate for Interpolation {}

/// Specifies a property to animate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Property {
    /// Node translation.
    Translation,
    /// Node rotation.
    Rotation,
    /// Node scale.
    Scale,
    /// Weights of morph targets.
    MorphTargetWeights,
}

impl Validate for Property {}

/// A keyframe animation.
#[derive(Clone, Debug)]
pub struct Animation {
    /// Each channel combines an animation sampler with a target property
    /// being animated.
    pub channels: Vec<Channel>,

    /// Name of this animation.
    pub name: Option<String>,

    /// Defines the curve used by each channel.
    pub samplers: Vec<Sampler>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

impl Validate for Animation {
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.channels
            .validate_minimally(root, || path().field("channels"), report);
        self.samplers
            .validate_minimally(root, || path().field("samplers"), report);
    }

    fn validate_completely<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.validate_minimally(root, &path, report);
        for (index, channel) in self.channels.iter().enumerate() {
            if channel.sampler.value() >= self.samplers.len() {
                report(
                    &|| path().field("channels").index(index).field("sampler"),
                    Error::IndexOutOfBounds,
                );
            }
        }
    }
}

/// Targets an animation's sampler at a node's property.
///
/// `sampler` indexes into the *owning animation's* `samplers`, not any
/// global collection on `Asset`, so it cannot use the generic
/// `Index<T>: Validate` bound the way a cross-collection reference does.
/// `Animation::validate_completely` bounds-checks it against its own
/// `samplers` directly; this impl only recurses into `target` and the
/// extension/extras payloads.
#[derive(Clone, Debug)]
pub struct Channel {
    /// The index of a sampler in this animation used to compute the value
    /// for the target.
    pub sampler: Index<Sampler>,

    /// The index of the node and property to target.
    pub target: Target,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

impl Validate for Channel {
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.target
            .validate_minimally(root, || path().field("target"), report);
    }

    fn validate_completely<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.target
            .validate_completely(root, || path().field("target"), report);
    }
}

/// The node and property this channel's sampler output is applied to.
#[derive(Clone, Debug, Validate)]
pub struct Target {
    /// The index of the node to target.
    pub node: Index<scene::Node>,

    /// The name of the node's property to modify.
    pub path: Checked<Property>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// Defines a keyframe graph but not its target.
#[derive(Clone, Debug, Validate)]
pub struct Sampler {
    /// The index of the accessor containing keyframe input values.
    pub input: Index<accessor::Accessor>,

    /// The interpolation algorithm.
    pub interpolation: Interpolation,

    /// The index of the accessor containing keyframe output values.
    pub output: Index<accessor::Accessor>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}
