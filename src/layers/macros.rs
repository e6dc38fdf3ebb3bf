//! Macros to reduce boilerplate in layer implementations

/// Implements the `LayerTrait` accessors that only read or write
/// the layer's `LayerProperties` field.
///
/// Usage:
/// ```ignore
/// impl LayerTrait for MyLayer {
///     impl_layer_trait!(properties);
///     // len, bounds, options ...
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }
    };
}
