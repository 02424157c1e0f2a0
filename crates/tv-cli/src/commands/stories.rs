use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Summary"]);

    for info in tv_story::available() {
        table.add_row(vec![info.name, info.summary]);
    }

    println!("{table}");
    println!();
    println!("  Play one with: thornvale play <name>");

    Ok(())
}
