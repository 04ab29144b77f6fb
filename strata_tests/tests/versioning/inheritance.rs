use crate::helpers::adapters::{I64Adapter, StrAdapter, U32Adapter};
use crate::helpers::fixtures::{Customer, Entity};
use anyhow::Result;
use strata_engine::{SchemaRegistry, Versioned};
use strata_types::adapter::FieldAdapter;
use strata_types::FormatVersion;

#[test]
fn parent_fields_sit_where_inherited() -> Result<()> {
    let schema = Customer::schema()?;
    let names = schema.fields().iter().map(|f| f.name()).collect::<Vec<_>>();
    assert_eq!(vec!["name", "id", "created_at", "order_ids"], names);
    assert_eq!(FormatVersion::new(3), schema.current_version());
    assert!(SchemaRegistry::global().contains::<Customer>());
    Ok(())
}

#[test]
fn child_version_retires_parent_field() -> Result<()> {
    let pre = Customer::new(5, 1_700_000_000, "Grace", &[101, 102]);
    let buf = pre.to_versioned_bytes()?;
    let post = Customer::from_versioned_bytes(&buf)?;

    assert_eq!(pre.name(), post.name());
    assert_eq!(pre.entity().id, post.entity().id);
    assert_eq!(pre.order_ids(), post.order_ids());
    // Retired at 3 by the parent's declaration, and the child writes 3.
    assert_eq!(0, post.entity().created_at);
    Ok(())
}

#[test]
fn parent_alone_keeps_its_own_version() -> Result<()> {
    let pre = Entity {
        id: 5,
        created_at: 6,
    };
    let buf = pre.to_versioned_bytes()?;
    assert_eq!(&5u32.to_be_bytes(), &buf[..4]);
    // created_at retired at 3, Entity writes 5.
    assert_eq!(4 + 8, buf.len());
    Ok(())
}

#[test]
fn reads_a_customer_written_before_orders_existed() -> Result<()> {
    let mut buf = vec![];
    FormatVersion::new(1).ser(&mut buf)?;
    StrAdapter.write(&mut buf, &String::from("Ada"))?;
    I64Adapter.write(&mut buf, &9)?;
    I64Adapter.write(&mut buf, &1_600_000_000)?;
    // Trailing bytes belong to whatever the caller stored next.
    U32Adapter.write(&mut buf, &0xdead_beef)?;

    let mut post = Customer::default();
    let mut r = std::io::Cursor::new(&buf);
    let (r_len, serialized_version) = post.read_versioned(&mut r)?;

    assert_eq!(FormatVersion::new(1), serialized_version);
    assert_eq!(buf.len() - 4, *r_len);
    assert_eq!("Ada", post.name());
    assert_eq!(9, post.entity().id);
    assert_eq!(0, post.entity().created_at);
    assert!(post.order_ids().is_empty());
    Ok(())
}
