//! Rendered text of every statement kind.

use pretty_assertions::assert_eq;

use crate::clause::Connector;
use crate::command::{Filterable, Statement};
use crate::error::QueryError;
use crate::statements::*;
use crate::value::{Rid, Value};

fn rid(cluster: i32, position: i64) -> Rid {
    Rid::new(cluster, position)
}

// DELETE EDGE

#[test]
fn test_delete_edge_by_rid() {
    let edge = DeleteEdge::rid(rid(12, 0));
    assert_eq!(edge.raw().unwrap(), "DELETE EDGE WHERE rid = #12:0");
}

#[test]
fn test_delete_edge_without_filter() {
    assert_eq!(DeleteEdge::new().raw().unwrap(), "DELETE EDGE");
}

#[test]
fn test_delete_edge_custom_filter() {
    let edge = DeleteEdge::new()
        .where_("@class = ?", "Knows")
        .unwrap()
        .and_where("since < ?", 2000)
        .unwrap();
    assert_eq!(edge.raw().unwrap(), "DELETE EDGE WHERE @class = Knows AND since < 2000");
}

// DELETE VERTEX

#[test]
fn test_delete_vertex_with_limit() {
    let vertex = DeleteVertex::new("Person").limit(5);
    assert_eq!(vertex.raw().unwrap(), "DELETE VERTEX Person LIMIT 5");
}

#[test]
fn test_delete_vertex_full() {
    let vertex = DeleteVertex::new("Person")
        .where_("age > ?", 30)
        .unwrap()
        .limit(10);
    assert_eq!(vertex.raw().unwrap(), "DELETE VERTEX Person WHERE age > 30 LIMIT 10");
}

#[test]
fn test_delete_vertex_limit_overwrites() {
    let vertex = DeleteVertex::new("Person").limit(5).limit(7);
    assert_eq!(vertex.raw().unwrap(), "DELETE VERTEX Person LIMIT 7");
}

#[test]
fn test_delete_vertex_limit_above_i64_max() {
    let limit = i64::MAX as u64 + 1;
    let vertex = DeleteVertex::new("Person").limit(limit);
    assert_eq!(vertex.raw().unwrap(), "DELETE VERTEX Person LIMIT 9223372036854775808");

    let select = Select::new(["name"])
        .from(["Person"], false)
        .skip(u64::MAX)
        .limit(u64::MAX);
    assert_eq!(
        select.raw().unwrap(),
        "SELECT name FROM Person SKIP 18446744073709551615 LIMIT 18446744073709551615"
    );
}

// WHERE composition

#[test]
fn test_where_and_or_order() {
    let delete = Delete::new("Person")
        .where_("x = ?", 1)
        .unwrap()
        .and_where("y = ?", 2)
        .unwrap()
        .or_where("z = ?", 3)
        .unwrap();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person WHERE x = 1 AND y = 2 OR z = 3");
}

#[test]
fn test_and_where_before_where() {
    let delete = Delete::new("Person").and_where("x = ?", 1).unwrap();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person WHERE x = 1");
}

#[test]
fn test_second_where_is_rejected() {
    let err = Delete::new("Person")
        .where_("x = ?", 1)
        .unwrap()
        .where_("y = ?", 2)
        .unwrap_err();
    assert!(matches!(err, QueryError::WhereAlreadySet { .. }));
}

#[test]
fn test_reset_where_then_where() {
    let delete = Delete::new("Person")
        .where_("x = ?", 1)
        .unwrap()
        .or_where("y = ?", 2)
        .unwrap()
        .reset_where();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person");

    let delete = delete.where_("z = ?", 3).unwrap();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person WHERE z = 3");
}

#[test]
fn test_value_less_condition() {
    let delete = Delete::new("Person")
        .condition(Connector::None, "name IS NULL")
        .unwrap()
        .condition(Connector::Or, "age IS NULL")
        .unwrap();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person WHERE name IS NULL OR age IS NULL");
}

#[test]
fn test_condition_without_placeholder_rejected() {
    let err = Delete::new("Person").where_("age > 30", 30).unwrap_err();
    assert!(matches!(err, QueryError::PlaceholderMismatch { expected: 1, found: 0, .. }));
}

#[test]
fn test_question_mark_inside_literal() {
    let delete = Delete::new("Person")
        .where_("name = 'who?' AND id = ?", 1)
        .unwrap()
        .condition(Connector::Or, "nick = \"what?\"")
        .unwrap();
    assert_eq!(
        delete.raw().unwrap(),
        "DELETE FROM Person WHERE name = 'who?' AND id = 1 OR nick = \"what?\""
    );

    let delete = Delete::new("Person")
        .condition(Connector::None, "name = 'who?'")
        .unwrap();
    assert_eq!(delete.raw().unwrap(), "DELETE FROM Person WHERE name = 'who?'");
}

#[test]
fn test_render_twice() {
    let select = Select::new(["name"]).from(["Person"], false).limit(3);
    assert_eq!(select.raw().unwrap(), select.raw().unwrap());
}

// INDEX

#[test]
fn test_index_remove_by_key() {
    let remove = IndexRemove::new("myIdx", Some("abc".into()), None);
    assert_eq!(remove.raw().unwrap(), "DELETE FROM index:myIdx WHERE key = 'abc'");
}

#[test]
fn test_index_remove_by_key_and_rid() {
    let remove = IndexRemove::new("myIdx", Some("abc".into()), Some(rid(12, 0)));
    assert_eq!(
        remove.raw().unwrap(),
        "DELETE FROM index:myIdx WHERE key = 'abc' AND rid = #12:0"
    );
}

#[test]
fn test_index_remove_by_rid_only() {
    let remove = IndexRemove::new("myIdx", None, Some(rid(12, 0)));
    assert_eq!(remove.raw().unwrap(), "DELETE FROM index:myIdx WHERE rid = #12:0");
}

#[test]
fn test_index_remove_everything() {
    let remove = IndexRemove::new("myIdx", None, None);
    assert_eq!(remove.raw().unwrap(), "DELETE FROM index:myIdx");
}

#[test]
fn test_index_remove_escapes_key() {
    let remove = IndexRemove::new("myIdx", Some("x' OR '1'='1".into()), None);
    assert_eq!(
        remove.raw().unwrap(),
        r"DELETE FROM index:myIdx WHERE key = 'x\' OR \'1\'=\'1'"
    );
}

#[test]
fn test_index_put() {
    let put = IndexPut::new("myIdx", "abc", rid(12, 0));
    assert_eq!(
        put.raw().unwrap(),
        "INSERT INTO index:myIdx (key,rid) VALUES (\"abc\", #12:0)"
    );
}

#[test]
fn test_index_put_empty_key() {
    let mut put = IndexPut::new("myIdx", "abc", rid(12, 0));
    put.command_mut()
        .set_token_values("Key", Vec::<Value>::new(), false);
    assert_eq!(
        put.raw().unwrap(),
        "INSERT INTO index:myIdx (key,rid) VALUES (\"\", #12:0)"
    );
}

#[test]
fn test_index_count() {
    assert_eq!(
        IndexCount::new("myIdx").raw().unwrap(),
        "SELECT count(*) AS size FROM index:myIdx"
    );
}

#[test]
fn test_index_create_and_drop() {
    assert_eq!(
        IndexCreate::new("name", Some("Person"), "UNIQUE").raw().unwrap(),
        "CREATE INDEX Person.name UNIQUE"
    );
    assert_eq!(
        IndexCreate::new("email", None, "NOTUNIQUE").raw().unwrap(),
        "CREATE INDEX email NOTUNIQUE"
    );
    assert_eq!(
        IndexDrop::new("name", Some("Person")).raw().unwrap(),
        "DROP INDEX Person.name"
    );
}

// TRUNCATE

#[test]
fn test_truncate_targets() {
    let class = Truncate::class("Person");
    assert_eq!(class.raw().unwrap(), "TRUNCATE CLASS Person");
    assert_eq!(class.target(), TruncateTarget::Class);

    assert_eq!(Truncate::cluster("person").raw().unwrap(), "TRUNCATE CLUSTER person");
    assert_eq!(Truncate::record(rid(9, 3)).raw().unwrap(), "TRUNCATE RECORD #9:3");
}

#[test]
fn test_truncate_name_is_not_quoted() {
    let truncate = Truncate::class("Person Archive");
    assert_eq!(truncate.raw().unwrap(), "TRUNCATE CLASS Person Archive");
}

// SELECT

#[test]
fn test_select_whole_records() {
    let select = Select::new(Vec::<&str>::new()).from(["Person"], false);
    assert_eq!(select.raw().unwrap(), "SELECT FROM Person");
}

#[test]
fn test_select_many_targets() {
    let select = Select::new(["name"]).from(["#10:1", "#10:2"], false);
    assert_eq!(select.raw().unwrap(), "SELECT name FROM [#10:1, #10:2]");
}

#[test]
fn test_select_append_projections() {
    let select = Select::new(["name"])
        .select(["age"], true)
        .from(["Person"], false);
    assert_eq!(select.raw().unwrap(), "SELECT name, age FROM Person");

    let replaced = select.select(["email"], false);
    assert_eq!(replaced.raw().unwrap(), "SELECT email FROM Person");
}

#[test]
fn test_select_order_skip_limit_fetchplan() {
    let select = Select::new(["name"])
        .from(["Person"], false)
        .order_by("name ASC")
        .order_by("age DESC")
        .order_by_first("@rid ASC")
        .skip(20)
        .limit(10)
        .fetch_plan("*:-1");
    assert_eq!(
        select.raw().unwrap(),
        "SELECT name FROM Person ORDER BY @rid ASC, name ASC, age DESC SKIP 20 LIMIT 10 FETCHPLAN *:-1"
    );
}

#[test]
fn test_select_between() {
    let select = Select::new(Vec::<&str>::new())
        .from(["index:dictionary"], false)
        .where_("key = ?", "x")
        .unwrap()
        .between("key", "a", "f")
        .unwrap();
    assert_eq!(
        select.raw().unwrap(),
        "SELECT FROM index:dictionary WHERE key BETWEEN 'a' AND 'f'"
    );
}

#[test]
fn test_select_between_then_reset() {
    let select = Select::new(Vec::<&str>::new())
        .from(["index:dictionary"], false)
        .between("key", "a", "f")
        .unwrap()
        .reset_where();
    assert_eq!(select.raw().unwrap(), "SELECT FROM index:dictionary");
}

#[test]
fn test_select_between_then_and_where() {
    let select = Select::new(Vec::<&str>::new())
        .from(["index:dictionary"], false)
        .between("key", "a", "f")
        .unwrap()
        .and_where("x = ?", 1)
        .unwrap()
        .limit(5);
    assert_eq!(
        select.raw().unwrap(),
        "SELECT FROM index:dictionary WHERE key BETWEEN 'a' AND 'f' AND x = 1 LIMIT 5"
    );
}

#[test]
fn test_select_between_rejects_pair_bound() {
    let err = Select::new(["name"])
        .between("key", Value::pair("a", 1), "f")
        .unwrap_err();
    assert!(matches!(err, QueryError::ValueType { token, .. } if token == "Where"));
}

#[test]
fn test_select_between_bound_with_question_mark() {
    let select = Select::new(Vec::<&str>::new())
        .from(["index:dictionary"], false)
        .between("key", "a?", "f")
        .unwrap();
    assert_eq!(
        select.raw().unwrap(),
        "SELECT FROM index:dictionary WHERE key BETWEEN 'a?' AND 'f'"
    );
}

// INSERT

#[test]
fn test_insert() {
    let insert = Insert::new()
        .into("Person")
        .fields(["name", "age"], false)
        .values([Value::from("Bob"), Value::from(30)], false);
    assert_eq!(
        insert.raw().unwrap(),
        "INSERT INTO Person (name, age) VALUES ('Bob', 30)"
    );
}

#[test]
fn test_insert_append_values() {
    let insert = Insert::new()
        .into("Person")
        .fields(["name"], false)
        .fields(["born"], true)
        .values(["Alice"], false)
        .values([rid(5, 1)], true);
    assert_eq!(
        insert.raw().unwrap(),
        "INSERT INTO Person (name, born) VALUES ('Alice', #5:1)"
    );
}

// UPDATE

#[test]
fn test_update_set() {
    let update = Update::new("Person")
        .set("name", "Bob")
        .set("age", 31)
        .where_("@rid = ?", rid(12, 0))
        .unwrap();
    assert_eq!(
        update.raw().unwrap(),
        "UPDATE Person SET name = 'Bob', age = 31 WHERE @rid = #12:0"
    );
}

#[test]
fn test_update_values_overwrite() {
    let update = Update::new("Person")
        .set("name", "Bob")
        .values([("name", "Alice")], false);
    assert_eq!(update.raw().unwrap(), "UPDATE Person SET name = 'Alice'");
}

#[test]
fn test_update_add_remove_put() {
    let add = UpdateAdd::new("Person").add("friends", rid(10, 2));
    assert_eq!(add.raw().unwrap(), "UPDATE Person ADD friends = #10:2");

    let remove = UpdateRemove::new("Person")
        .remove("friends", rid(10, 2))
        .where_("name = ?", "Bob")
        .unwrap();
    assert_eq!(
        remove.raw().unwrap(),
        "UPDATE Person REMOVE friends = #10:2 WHERE name = Bob"
    );

    let put = UpdatePut::new("Person").put("addresses", "home", rid(12, 0));
    assert_eq!(put.raw().unwrap(), "UPDATE Person PUT addresses = 'home', #12:0");
}

// GRANT / REVOKE

#[test]
fn test_grant_and_revoke() {
    let grant = Grant::new("READ").on("database.cluster.person").to("reader");
    assert_eq!(grant.raw().unwrap(), "GRANT READ ON database.cluster.person TO reader");

    let revoke = Revoke::new("UPDATE").on("database.class.Person").from("writer");
    assert_eq!(revoke.raw().unwrap(), "REVOKE UPDATE ON database.class.Person FROM writer");
}

// CLASS / PROPERTY

#[test]
fn test_class_statements() {
    assert_eq!(CreateClass::new("Person").raw().unwrap(), "CREATE CLASS Person");
    assert_eq!(
        CreateClass::new("Person").extends("V").raw().unwrap(),
        "CREATE CLASS Person EXTENDS V"
    );
    assert_eq!(DropClass::new("Person").raw().unwrap(), "DROP CLASS Person");
    assert_eq!(
        AlterClass::new("Person", "SUPERCLASS", "V").raw().unwrap(),
        "ALTER CLASS Person SUPERCLASS V"
    );
}

#[test]
fn test_property_statements() {
    assert_eq!(
        CreateProperty::new("Person", "name", "STRING").raw().unwrap(),
        "CREATE PROPERTY Person.name STRING"
    );
    assert_eq!(
        CreateProperty::new("Person", "friends", "LINKSET")
            .linked("Person")
            .raw()
            .unwrap(),
        "CREATE PROPERTY Person.friends LINKSET Person"
    );
    assert_eq!(
        DropProperty::new("Person", "name").raw().unwrap(),
        "DROP PROPERTY Person.name"
    );
    assert_eq!(
        AlterProperty::new("Person", "name", "MANDATORY", "true").raw().unwrap(),
        "ALTER PROPERTY Person.name MANDATORY true"
    );
}

// LINK / FIND REFERENCES

#[test]
fn test_link_with_type() {
    let link = Link::new("Comment", "postId", "post")
        .link_type("LINKSET")
        .with("Post", "id");
    assert_eq!(
        link.raw().unwrap(),
        "CREATE LINK post TYPE LINKSET FROM Comment.postId TO Post.id"
    );
}

#[test]
fn test_link_without_destination() {
    let link = Link::new("Comment", "postId", "post");
    assert_eq!(link.raw().unwrap(), "CREATE LINK post FROM Comment.postId");

    let link = link.inverse();
    assert_eq!(link.raw().unwrap(), "CREATE LINK post FROM Comment.postId INVERSE");
}

#[test]
fn test_find_references() {
    let find = FindReferences::new(rid(12, 0));
    assert_eq!(find.raw().unwrap(), "FIND REFERENCES #12:0");

    let find = find.in_classes(["Person"], false).in_classes(["Company"], true);
    assert_eq!(find.raw().unwrap(), "FIND REFERENCES #12:0 [Person,Company]");

    let find = find.in_classes(Vec::<&str>::new(), false);
    assert_eq!(find.raw().unwrap(), "FIND REFERENCES #12:0");
}

// Tokens

#[test]
fn test_tokens_after_construction() {
    let vertex = DeleteVertex::new("Person");
    let tokens = vertex.tokens();
    assert_eq!(tokens.values("Class"), &[Value::from("Person")]);
    assert!(!tokens.is_set("Limit"));
    assert!(!tokens.is_set("Where"));
}

#[test]
fn test_bad_rid_in_token_reports_token() {
    let mut truncate = Truncate::record(rid(1, 1));
    truncate.command_mut().set_token("Name", "not-a-rid");
    let err = truncate.raw().unwrap_err();
    assert!(matches!(err, QueryError::ValueType { token, .. } if token == "Name"));
}
