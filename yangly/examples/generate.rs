//! Generates TypeScript for an inline module document.
//!
//! Run with: `cargo run --example generate`

use yangly::prelude::*;

const MODULE: &str = r#"<module name="acme-system" namespace="urn:acme:system">
    <revision date="2024-06-01"/>
    <container name="system">
        <leaf name="hostname" mandatory="true"><type kind="string"/></leaf>
        <leaf name="boot-count"><type kind="uint64"/></leaf>
        <leaf name="mode">
            <type kind="enumeration"><enum name="standby"/><enum name="active"/></type>
        </leaf>
        <list name="user" key="uid">
            <leaf name="uid"><type kind="uint32"/></leaf>
            <leaf-list name="groups"><type kind="string"/></leaf-list>
        </list>
    </container>
</module>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let module = parse_module(MODULE)?;
    validate_module(&module)?;

    match generate_module(&module, &GenerateOptions::default())? {
        Some(source) => print!("{}", source),
        None => println!("module {} has no data nodes", module.name),
    }

    Ok(())
}
