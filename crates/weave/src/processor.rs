//! The built, immutable template processor.

use crate::engine::TemplateEngine;
use crate::error::ProcessError;
use crate::provider::ProviderRegistry;

/// An immutable, reusable processor over compiled templates.
///
/// Built by [`TemplateProcessorBuilder`](crate::TemplateProcessorBuilder).
/// The compiled templates and the frozen provider registry are owned
/// exclusively by the processor; [`get`](Self::get) is the single
/// operation.
///
/// The processor itself holds no mutable state, so repeated `get()` calls
/// are independent. Whether output varies across calls depends only on the
/// registered suppliers: pure suppliers yield byte-identical output every
/// time, while a supplier backed by a counter or clock legitimately
/// produces fresh values per call.
pub struct TemplateProcessor {
    engine: Box<dyn TemplateEngine>,
    template_count: usize,
    providers: ProviderRegistry,
}

impl std::fmt::Debug for TemplateProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateProcessor")
            .field("template_count", &self.template_count)
            .finish_non_exhaustive()
    }
}

impl TemplateProcessor {
    pub(crate) fn new(
        engine: Box<dyn TemplateEngine>,
        template_count: usize,
        providers: ProviderRegistry,
    ) -> Self {
        Self {
            engine,
            template_count,
            providers,
        }
    }

    /// Renders every template and returns the concatenated output.
    ///
    /// Each call resolves the providers into one fresh context map
    /// (invoking every supplier exactly once), renders every template
    /// against that same map in registration order, and concatenates the
    /// results with no separators.
    ///
    /// Fail-fast: if any template's render fails, the whole call returns
    /// [`ProcessError::TemplateRender`] identifying the offending template,
    /// and output already rendered in this call is discarded.
    pub fn get(&self) -> Result<String, ProcessError> {
        let context = self.providers.resolve();
        let mut output = String::new();
        for template_id in 0..self.template_count {
            output.push_str(&self.engine.render(template_id, &context)?);
        }
        Ok(output)
    }

    /// Returns the number of templates this processor renders.
    pub fn template_count(&self) -> usize {
        self.template_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TemplateProcessorBuilder;
    use crate::provider::ValueProvider;
    use minijinja::Value;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn single_template_substitution() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("This is a {{ text }}")
            .add("text", "test")
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "This is a test");
    }

    #[test]
    fn templates_concatenate_in_registration_order() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("A")
            .use_template("B")
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "AB");
        assert_eq!(processor.template_count(), 2);
    }

    #[test]
    fn no_separator_between_templates() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("{{ a }}")
            .use_template("{{ b }}")
            .add("a", "left")
            .add("b", "right")
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "leftright");
    }

    #[test]
    fn pure_suppliers_are_idempotent() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("{{ greeting }}, {{ name }}!")
            .add("greeting", "Hello")
            .add_with("name", || "World".to_string())
            .build()
            .unwrap();
        let first = processor.get().unwrap();
        let second = processor.get().unwrap();
        assert_eq!(first, "Hello, World!");
        assert_eq!(first, second);
    }

    #[test]
    fn counter_supplier_yields_fresh_value_per_call() {
        let counter = Rc::new(Cell::new(0_u64));
        let c = Rc::clone(&counter);
        let processor = TemplateProcessorBuilder::new()
            .use_template("call {{ n }}")
            .add_provider("n", move || {
                let value = c.get();
                c.set(value + 1);
                Value::from(value)
            })
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "call 0");
        assert_eq!(processor.get().unwrap(), "call 1");
    }

    #[test]
    fn same_context_shared_by_all_templates() {
        // The counter is resolved once per call, so both templates see the
        // same value within one get().
        let counter = Rc::new(Cell::new(0_u64));
        let c = Rc::clone(&counter);
        let processor = TemplateProcessorBuilder::new()
            .use_template("{{ n }}-")
            .use_template("{{ n }}")
            .add_provider("n", move || {
                let value = c.get();
                c.set(value + 1);
                Value::from(value)
            })
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "0-0");
        assert_eq!(processor.get().unwrap(), "1-1");
    }

    #[test]
    fn unreferenced_supplier_still_invoked_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let processor = TemplateProcessorBuilder::new()
            .use_template("static")
            .add_provider("unused", move || {
                c.set(c.get() + 1);
                Value::from("ignored")
            })
            .build()
            .unwrap();
        processor.get().unwrap();
        processor.get().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn none_value_renders_as_empty_string() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("[{{ maybe }}]")
            .add_with("maybe", || None::<String>)
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "[]");
    }

    #[test]
    fn eager_none_renders_as_empty_string() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("[{{ maybe }}]")
            .add("maybe", None::<String>)
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "[]");
    }

    #[test]
    fn undefined_reference_fails_the_whole_call() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("rendered fine")
            .use_template("{{ missing }}")
            .build()
            .unwrap();
        let err = processor.get().unwrap_err();
        match err {
            ProcessError::TemplateRender { template_id, .. } => assert_eq!(template_id, 1),
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn nested_json_value_is_reachable_by_path() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("{{ user.name }} ({{ user.id }})")
            .add("user", serde_json::json!({"name": "Ada", "id": 1}))
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "Ada (1)");
    }

    #[test]
    fn structured_values_drive_control_flow() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("{% for item in items %}{{ item }};{% endfor %}")
            .add("items", vec!["a", "b", "c"])
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "a;b;c;");
    }

    struct PositionEcho;

    impl TemplateEngine for PositionEcho {
        fn compile(&mut self, _template_id: usize, _source: &str) -> Result<(), ProcessError> {
            Ok(())
        }

        fn render(
            &self,
            template_id: usize,
            _context: &HashMap<String, Value>,
        ) -> Result<String, ProcessError> {
            Ok(format!("T{}", template_id))
        }
    }

    #[test]
    fn injected_engine_is_used() {
        let processor = TemplateProcessorBuilder::new()
            .use_template("anything")
            .use_template("goes")
            .with_engine(Box::new(PositionEcho))
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "T0T1");
    }

    #[test]
    fn provider_trait_object_registration() {
        struct Fixed;
        impl ValueProvider for Fixed {
            fn provide(&self) -> Value {
                Value::from("fixed")
            }
        }

        let processor = TemplateProcessorBuilder::new()
            .use_template("{{ v }}")
            .add_provider("v", Fixed)
            .build()
            .unwrap();
        assert_eq!(processor.get().unwrap(), "fixed");
    }
}
