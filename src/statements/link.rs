//! CREATE LINK.

use crate::command::Command;
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;

static SCHEMA: Schema = Schema::new(
    "CREATE LINK :Name :Type FROM :SourceClass.:SourceProperty :Destination :Inverse",
);

statement!(
    /// `CREATE LINK <name> [TYPE <type>] FROM <class>.<property>
    /// TO <class>.<property> [INVERSE]`
    ///
    /// The destination is set with [`Link::with`]; until then the statement
    /// renders without its `TO` part.
    ///
    /// # Example
    ///
    /// ```
    /// use orientql::prelude::*;
    ///
    /// let link = Link::new("Comment", "postId", "post")
    ///     .with("Post", "id")
    ///     .inverse();
    /// assert_eq!(
    ///     link.raw().unwrap(),
    ///     "CREATE LINK post FROM Comment.postId TO Post.id INVERSE"
    /// );
    /// ```
    Link,
    hydrates = false
);

impl Link {
    /// Link `source_class.source_property` under the name `name`.
    pub fn new(source_class: &str, source_property: &str, name: &str) -> Self {
        let formatters = FormatterMap::new()
            .with("Type", Formatter::Keyword("TYPE"))
            .with("Destination", Formatter::Keyword("TO"));
        let mut command = Command::new(SCHEMA.template(), &formatters);
        command.set_token("SourceClass", source_class);
        command.set_token("SourceProperty", source_property);
        command.set_token("Name", name);
        Self { command }
    }

    /// The destination `class.property` the link points to.
    pub fn with(mut self, class: &str, property: &str) -> Self {
        self.command
            .set_token("Destination", format!("{}.{}", class, property));
        self
    }

    /// `LINK`, `LINKSET` or `LINKLIST`.
    pub fn link_type(mut self, link_type: &str) -> Self {
        self.command.set_token("Type", link_type);
        self
    }

    /// Create the link on the destination side as well.
    pub fn inverse(mut self) -> Self {
        self.command.set_token("Inverse", "INVERSE");
        self
    }
}
