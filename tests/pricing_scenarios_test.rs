use anyhow::Result;
use product_estimate::{Catalog, EditOutcome, EstimateStore, LaborEdit, MaterialEdit};
use rust_decimal_macros::dec;

fn labor_only_store() -> Result<EstimateStore> {
    let mut store = EstimateStore::empty(Catalog::reference());
    let index = store.add_labor();
    store.update_labor(index, LaborEdit::SetHours(dec!(2)))?;
    store.set_overhead_rate(dec!(15));
    store.set_profit_margin(dec!(25));
    Ok(store)
}

/// 只有一筆人工：2 小時 x 25
#[test]
fn test_labor_only_rollup() -> Result<()> {
    let store = labor_only_store()?;
    let summary = store.summary();

    assert_eq!(summary.labor_cost, dec!(50));
    assert_eq!(summary.material_cost, dec!(0));
    assert_eq!(summary.subtotal, dec!(50));
    assert_eq!(summary.overhead_cost, dec!(7.5));
    assert_eq!(summary.total_cost, dec!(57.5));
    assert_eq!(summary.profit, dec!(14.375));
    assert_eq!(summary.final_price, dec!(71.875));
    Ok(())
}

#[test]
fn test_single_aluminum_material() -> Result<()> {
    let mut store = EstimateStore::empty(Catalog::reference());
    let index = store.add_material();
    store.update_material(index, MaterialEdit::SetQuantity(3))?;

    assert_eq!(store.materials()[index].unit_cost(), dec!(5.75));
    assert_eq!(store.materials()[index].total_cost(), dec!(17.25));
    assert_eq!(store.summary().material_cost, dec!(17.25));
    Ok(())
}

#[test]
fn test_unknown_catalog_id_leaves_line_untouched() -> Result<()> {
    let mut store = EstimateStore::empty(Catalog::reference());
    store.add_material();
    store.update_material(0, MaterialEdit::SetCatalogId("m3".to_string()))?;
    store.update_material(0, MaterialEdit::SetQuantity(7))?;
    let before = store.materials()[0].clone();

    let outcome = store.update_material(0, MaterialEdit::SetCatalogId("nope".to_string()))?;

    assert_eq!(outcome, EditOutcome::Ignored);
    assert_eq!(store.materials()[0], before);
    Ok(())
}

#[test]
fn test_removing_only_material_clears_cost() -> Result<()> {
    let mut store = EstimateStore::empty(Catalog::reference());
    store.add_material();
    store.update_material(0, MaterialEdit::SetQuantity(4))?;

    store.remove_material(0)?;

    assert!(store.materials().is_empty());
    assert_eq!(store.summary().material_cost, dec!(0));
    Ok(())
}

#[test]
fn test_quantity_update_sets_total() -> Result<()> {
    let mut store = EstimateStore::empty(Catalog::reference());
    for id in ["m2", "m5", "m7"] {
        let index = store.add_material();
        store.update_material(index, MaterialEdit::SetCatalogId(id.to_string()))?;
    }

    for (index, quantity) in [(0usize, 10u32), (1, 1), (2, 250)] {
        store.update_material(index, MaterialEdit::SetQuantity(quantity))?;
        let line = &store.materials()[index];
        assert_eq!(line.total_cost(), line.unit_cost() * rust_decimal::Decimal::from(quantity));
    }
    Ok(())
}

#[test]
fn test_hours_and_rate_order_independent() -> Result<()> {
    let mut hours_first = EstimateStore::empty(Catalog::reference());
    hours_first.add_labor();
    hours_first.update_labor(0, LaborEdit::SetHours(dec!(3.5)))?;
    hours_first.update_labor(0, LaborEdit::SetRate(dec!(42)))?;

    let mut rate_first = EstimateStore::empty(Catalog::reference());
    rate_first.add_labor();
    rate_first.update_labor(0, LaborEdit::SetRate(dec!(42)))?;
    rate_first.update_labor(0, LaborEdit::SetHours(dec!(3.5)))?;

    assert_eq!(hours_first.labor()[0].total_cost(), dec!(147));
    assert_eq!(hours_first.labor(), rate_first.labor());
    Ok(())
}

#[test]
fn test_adding_material_is_linear() -> Result<()> {
    let mut store = labor_only_store()?;
    store.set_overhead_rate(dec!(0));
    store.set_profit_margin(dec!(0));
    let before = store.summary();

    let index = store.add_material();
    store.update_material(index, MaterialEdit::SetCatalogId("m7".to_string()))?;
    store.update_material(index, MaterialEdit::SetQuantity(2))?;
    let added = store.materials()[index].total_cost();
    let after = store.summary();

    assert_eq!(added, dec!(17.5));
    assert_eq!(after.material_cost - before.material_cost, added);
    assert_eq!(after.subtotal - before.subtotal, added);
    assert_eq!(after.total_cost - before.total_cost, added);
    assert_eq!(after.final_price - before.final_price, added);
    Ok(())
}

#[test]
fn test_summary_is_idempotent() -> Result<()> {
    let mut store = labor_only_store()?;
    store.add_material();

    assert_eq!(store.summary(), store.summary());
    Ok(())
}

#[test]
fn test_rates_are_not_clamped() -> Result<()> {
    let mut store = labor_only_store()?;
    store.set_overhead_rate(dec!(-20));
    store.set_profit_margin(dec!(200));

    let summary = store.summary();
    assert_eq!(summary.overhead_cost, dec!(-10));
    assert_eq!(summary.total_cost, dec!(40));
    assert_eq!(summary.final_price, dec!(120));
    Ok(())
}

#[test]
fn test_extreme_rate_saturates_instead_of_panicking() -> Result<()> {
    let mut store = labor_only_store()?;
    store.set_overhead_rate(rust_decimal::Decimal::MAX);
    let index = store.add_material();
    store.update_material(index, MaterialEdit::SetQuantity(u32::MAX))?;

    let summary = store.summary();
    assert_eq!(summary.total_cost, rust_decimal::Decimal::MAX);
    assert_eq!(summary.final_price, rust_decimal::Decimal::MAX);
    Ok(())
}

#[test]
fn test_extreme_unit_cost_sheet_is_rejected_before_build() -> Result<()> {
    let sheet = product_estimate::EstimateSheet::from_toml_str(
        r#"
[product]
name = "Ingot"

[[catalog]]
id = "gold"
name = "Gold"
unit_cost = "79228162514264337593543950335"

[[materials]]
id = "gold"
quantity = 2
"#,
    )?;

    assert!(matches!(
        sheet.validate_sheet(),
        Err(product_estimate::EstimateError::InvalidConfigValueError { .. })
    ));

    // 即使略過驗證，建立估價也不應 panic
    let store = sheet.build_store()?;
    assert_eq!(store.materials()[0].total_cost(), rust_decimal::Decimal::MAX);
    Ok(())
}
