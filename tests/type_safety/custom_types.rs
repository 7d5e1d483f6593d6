//! Tests for user-defined argument and result types

use std::collections::{BTreeMap, HashMap};

use lazydag::{Bound, DagResult, TaskGraph};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Active,
    Suspended { reason: String },
}

#[test]
fn test_struct_result() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let id = graph.add(
        |name: String, age: u32| User { name, age },
        ("Alice".to_string(), 30_u32),
    )?;

    assert_eq!(
        graph.get_result::<User>(id)?,
        User {
            name: "Alice".to_string(),
            age: 30,
        }
    );
    Ok(())
}

#[test]
fn test_struct_flows_between_tasks() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let user = graph.add(
        |name: String| User { name, age: 41 },
        "Bob".to_string(),
    )?;
    let summary = graph.add(
        |u: User| format!("{} ({})", u.name, u.age),
        graph.future_result::<User>(user)?,
    )?;

    assert_eq!(graph.get_result::<String>(summary)?, "Bob (41)");
    Ok(())
}

#[test]
fn test_bound_custom_argument() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let id = graph.add(
        |status: Status| matches!(status, Status::Suspended { .. }),
        Bound(Status::Suspended {
            reason: "billing".to_string(),
        }),
    )?;

    assert!(graph.get_result::<bool>(id)?);
    Ok(())
}

#[test]
fn test_enum_result() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let flag = graph.add(|| true, ())?;
    let status = graph.add(
        |ok: bool| {
            if ok {
                Status::Active
            } else {
                Status::Suspended {
                    reason: "manual".to_string(),
                }
            }
        },
        graph.future_result::<bool>(flag)?,
    )?;

    assert_eq!(graph.get_result::<Status>(status)?, Status::Active);
    Ok(())
}

#[test]
fn test_tuple_result() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let pair = graph.add(|| ("left", 2_u8), ())?;
    let swapped = graph.add(
        |(s, n): (&'static str, u8)| (n, s),
        graph.future_result::<(&'static str, u8)>(pair)?,
    )?;

    assert_eq!(graph.get_result::<(u8, &'static str)>(swapped)?, (2, "left"));
    Ok(())
}

#[test]
fn test_standard_containers_as_arguments() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let mut hashed = HashMap::new();
    hashed.insert("a", 1);
    let mut ordered = BTreeMap::new();
    ordered.insert(2, "two");

    let id = graph.add(
        |h: HashMap<&str, i32>,
         o: BTreeMap<i32, &str>,
         v: Vec<u8>,
         opt: Option<i32>,
         res: Result<i32, String>| {
            h["a"] + o.len() as i32 + v.len() as i32 + opt.unwrap_or(0) + res.unwrap_or(0)
        },
        (hashed, ordered, vec![1_u8, 2, 3], Some(10), Ok::<i32, String>(100)),
    )?;

    assert_eq!(graph.get_result::<i32>(id)?, 115);
    Ok(())
}

#[test]
fn test_result_type_with_error_variant() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let parsed = graph.add(|s: String| s.parse::<i32>(), "12x".to_string())?;

    let value = graph.get_result::<Result<i32, std::num::ParseIntError>>(parsed)?;
    assert!(value.is_err());
    Ok(())
}
