//! Java value-object class generation.

use crate::context::GenerationContext;
use crate::naming::accessor_name;
use crate::profile::GenerationProfile;
use ironpojo_struct::{Struct, StructAttribute};

/// Generator for a single Java value-object class.
///
/// Pure transform over a borrowed model and profile: no I/O, no shared
/// state. Structurally equal inputs produce byte-identical output.
pub struct ClassGenerator<'a> {
    model: &'a Struct,
    profile: &'a GenerationProfile,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(model: &'a Struct, profile: &'a GenerationProfile) -> Self {
        Self { model, profile }
    }

    /// Generates the complete class source text.
    ///
    /// Emits, in order: the profile's import lines, the class header,
    /// field declarations in attribute order, a constructor assigning
    /// every attribute, one accessor per attribute, and the
    /// `equals`/`hashCode`/`toString` methods. Every line carries the
    /// profile's line prefix, repeated per nesting level.
    #[must_use]
    pub fn generate(&self) -> String {
        tracing::debug!(
            "Generating class {} with {} attributes",
            self.model.name(),
            self.model.attribute_count()
        );

        let mut ctx = GenerationContext::new(self.profile.line_prefix());

        self.generate_imports(&mut ctx);
        self.generate_header(&mut ctx);
        ctx.enter_block();

        self.generate_fields(&mut ctx);
        ctx.blank_line();
        self.generate_constructor(&mut ctx);

        for attribute in self.model.attributes() {
            ctx.blank_line();
            self.generate_accessor(&mut ctx, attribute);
        }

        ctx.blank_line();
        self.generate_equals(&mut ctx);
        ctx.blank_line();
        self.generate_hash_code(&mut ctx);
        ctx.blank_line();
        self.generate_to_string(&mut ctx);

        ctx.exit_block();
        ctx.write_line("}");

        ctx.finish()
    }

    /// Emits the profile's import lines verbatim, followed by a blank
    /// separator when any are present.
    fn generate_imports(&self, ctx: &mut GenerationContext) {
        let mut emitted = false;
        for line in self.profile.import_lines() {
            ctx.write_line(line);
            emitted = true;
        }
        if emitted {
            ctx.blank_line();
        }
    }

    /// Emits the class header, marking the class final when the model is
    /// effectively immutable.
    fn generate_header(&self, ctx: &mut GenerationContext) {
        if self.model.is_immutable() {
            ctx.write_line(&format!("public final class {} {{", self.model.name()));
        } else {
            ctx.write_line(&format!("public class {} {{", self.model.name()));
        }
    }

    /// Emits one field declaration per attribute, in attribute order.
    fn generate_fields(&self, ctx: &mut GenerationContext) {
        if self.model.attribute_count() == 0 {
            return;
        }

        ctx.blank_line();
        for attribute in self.model.attributes() {
            if attribute.is_constant() {
                ctx.write_line(&format!(
                    "private final {} {};",
                    attribute.type_name(),
                    attribute.name()
                ));
            } else {
                ctx.write_line(&format!(
                    "private {} {};",
                    attribute.type_name(),
                    attribute.name()
                ));
            }
        }
    }

    /// Emits a constructor whose parameter list is the attribute sequence
    /// in order, assigning each parameter to its field.
    fn generate_constructor(&self, ctx: &mut GenerationContext) {
        let parameters: Vec<String> = self
            .model
            .attributes()
            .map(|a| format!("final {} {}", a.type_name(), a.name()))
            .collect();

        ctx.write_line(&format!(
            "public {}({}) {{",
            self.model.name(),
            parameters.join(", ")
        ));

        ctx.enter_block();
        for attribute in self.model.attributes() {
            ctx.write_line(&format!(
                "this.{} = {};",
                attribute.name(),
                attribute.name()
            ));
        }
        ctx.exit_block();
        ctx.write_line("}");
    }

    /// Emits the accessor method for one attribute.
    fn generate_accessor(&self, ctx: &mut GenerationContext, attribute: &StructAttribute) {
        ctx.write_line(&format!(
            "public {} {}() {{",
            attribute.type_name(),
            accessor_name(attribute.name())
        ));
        ctx.enter_block();
        ctx.write_line(&format!("return this.{};", attribute.name()));
        ctx.exit_block();
        ctx.write_line("}");
    }

    /// Emits an `equals` method mirroring the model's own structural,
    /// order-sensitive comparison.
    fn generate_equals(&self, ctx: &mut GenerationContext) {
        let name = self.model.name();

        ctx.write_line("@Override");
        ctx.write_line("public boolean equals(final Object other) {");
        ctx.enter_block();

        ctx.write_line("if (this == other) {");
        ctx.enter_block();
        ctx.write_line("return true;");
        ctx.exit_block();
        ctx.write_line("}");

        ctx.write_line(&format!("if (!(other instanceof {name})) {{"));
        ctx.enter_block();
        ctx.write_line("return false;");
        ctx.exit_block();
        ctx.write_line("}");

        if self.model.attribute_count() == 0 {
            ctx.write_line("return true;");
        } else {
            ctx.write_line(&format!("final {name} that = ({name}) other;"));
            let comparisons: Vec<String> = self
                .model
                .attributes()
                .map(|a| {
                    format!(
                        "java.util.Objects.equals(this.{}, that.{})",
                        a.name(),
                        a.name()
                    )
                })
                .collect();
            ctx.write_line(&format!("return {};", comparisons.join(" && ")));
        }

        ctx.exit_block();
        ctx.write_line("}");
    }

    /// Emits a `hashCode` method over all attributes in order.
    fn generate_hash_code(&self, ctx: &mut GenerationContext) {
        let fields: Vec<String> = self
            .model
            .attributes()
            .map(|a| format!("this.{}", a.name()))
            .collect();

        ctx.write_line("@Override");
        ctx.write_line("public int hashCode() {");
        ctx.enter_block();
        ctx.write_line(&format!(
            "return java.util.Objects.hash({});",
            fields.join(", ")
        ));
        ctx.exit_block();
        ctx.write_line("}");
    }

    /// Emits a `toString` method exposing all attributes in order.
    fn generate_to_string(&self, ctx: &mut GenerationContext) {
        let name = self.model.name();

        ctx.write_line("@Override");
        ctx.write_line("public String toString() {");
        ctx.enter_block();

        if self.model.attribute_count() == 0 {
            ctx.write_line(&format!("return \"{name}{{}}\";"));
        } else {
            let parts: Vec<String> = self
                .model
                .attributes()
                .enumerate()
                .map(|(index, a)| {
                    if index == 0 {
                        format!("\"{}=\" + this.{}", a.name(), a.name())
                    } else {
                        format!("\", {}=\" + this.{}", a.name(), a.name())
                    }
                })
                .collect();
            ctx.write_line(&format!(
                "return \"{name}{{\" + {} + \"}}\";",
                parts.join(" + ")
            ));
        }

        ctx.exit_block();
        ctx.write_line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attr(name: &str, type_name: &str, constant: bool) -> StructAttribute {
        StructAttribute::create(name, type_name, constant).unwrap()
    }

    fn person() -> Struct {
        Struct::builder()
            .name("Person")
            .attribute(attr("id", "long", true))
            .attribute(attr("name", "String", false))
            .attribute(attr("address", "Address", false))
            .create()
            .unwrap()
    }

    fn indented_profile() -> GenerationProfile {
        let mut options = HashMap::new();
        options.insert(GenerationProfile::LINE_PREFIX.to_string(), "  ".to_string());
        GenerationProfile::create(Vec::new(), options)
    }

    #[test]
    fn test_person_end_to_end() {
        let model = person();
        let profile = indented_profile();
        let output = ClassGenerator::new(&model, &profile).generate();

        let expected = "  public class Person {

    private final long id;
    private String name;
    private Address address;

    public Person(final long id, final String name, final Address address) {
      this.id = id;
      this.name = name;
      this.address = address;
    }

    public long getId() {
      return this.id;
    }

    public String getName() {
      return this.name;
    }

    public Address getAddress() {
      return this.address;
    }

    @Override
    public boolean equals(final Object other) {
      if (this == other) {
        return true;
      }
      if (!(other instanceof Person)) {
        return false;
      }
      final Person that = (Person) other;
      return java.util.Objects.equals(this.id, that.id) && java.util.Objects.equals(this.name, that.name) && java.util.Objects.equals(this.address, that.address);
    }

    @Override
    public int hashCode() {
      return java.util.Objects.hash(this.id, this.name, this.address);
    }

    @Override
    public String toString() {
      return \"Person{\" + \"id=\" + this.id + \", name=\" + this.name + \", address=\" + this.address + \"}\";
    }
  }
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let model = person();
        let profile = indented_profile();

        let first = ClassGenerator::new(&model, &profile).generate();
        let second = ClassGenerator::new(&model, &profile).generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_models_generate_identical_text() {
        let built = person();
        let direct = Struct::with_attributes(
            "Person",
            vec![
                attr("id", "long", true),
                attr("name", "String", false),
                attr("address", "Address", false),
            ],
        );
        assert_eq!(built, direct);

        let profile = GenerationProfile::default();
        assert_eq!(
            ClassGenerator::new(&built, &profile).generate(),
            ClassGenerator::new(&direct, &profile).generate()
        );
    }

    #[test]
    fn test_zero_attribute_class() {
        let model = Struct::create("Empty");
        let profile = GenerationProfile::default();
        let output = ClassGenerator::new(&model, &profile).generate();

        // No attributes and not declared constant is still immutable.
        assert!(output.starts_with("public final class Empty {\n"));
        assert!(output.contains("public Empty() {\n}\n"));
        assert!(output.contains("return java.util.Objects.hash();"));
        assert!(output.contains("return \"Empty{}\";"));
        assert!(!output.contains("private"));
    }

    #[test]
    fn test_final_class_when_declared_constant() {
        let model = Struct::with_constant("Point", vec![attr("x", "int", false)], true);
        let profile = GenerationProfile::default();
        let output = ClassGenerator::new(&model, &profile).generate();

        assert!(output.starts_with("public final class Point {\n"));
        // The attribute itself stays non-final.
        assert!(output.contains("private int x;"));
    }

    #[test]
    fn test_import_lines_emitted_first_with_prefix() {
        let mut options = HashMap::new();
        options.insert(GenerationProfile::LINE_PREFIX.to_string(), "> ".to_string());
        let profile = GenerationProfile::create(
            vec![
                "import java.util.Objects;".to_string(),
                "import java.util.List;".to_string(),
            ],
            options,
        );
        let model = Struct::create("Empty");
        let output = ClassGenerator::new(&model, &profile).generate();

        assert!(output.starts_with(
            "> import java.util.Objects;\n> import java.util.List;\n\n> public final class Empty {\n"
        ));
    }

    #[test]
    fn test_field_order_matches_attribute_order() {
        let model = person();
        let profile = GenerationProfile::default();
        let output = ClassGenerator::new(&model, &profile).generate();

        let id_pos = output.find("private final long id;").unwrap();
        let name_pos = output.find("private String name;").unwrap();
        let address_pos = output.find("private Address address;").unwrap();
        assert!(id_pos < name_pos);
        assert!(name_pos < address_pos);
    }

    #[test]
    fn test_duplicate_attribute_names_emitted_as_is() {
        let model = Struct::with_attributes(
            "Odd",
            vec![attr("value", "int", false), attr("value", "long", false)],
        );
        let profile = GenerationProfile::default();
        let output = ClassGenerator::new(&model, &profile).generate();

        assert!(output.contains("private int value;"));
        assert!(output.contains("private long value;"));
    }
}
