//! Well-known field markers.

/// Marks a field as optional.
pub const OPTIONAL_MARKER: &str = "optional";

/// Marks a field as required.
pub const REQUIRED_MARKER: &str = "required";

/// Kubebuilder spelling of [`OPTIONAL_MARKER`].
pub const KUBEBUILDER_OPTIONAL_MARKER: &str = "kubebuilder:validation:Optional";

/// Kubebuilder spelling of [`REQUIRED_MARKER`].
pub const KUBEBUILDER_REQUIRED_MARKER: &str = "kubebuilder:validation:Required";
