use crate::telemetry::Dataset;

pub fn handle_regions_command() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_regions(&Dataset::builtin()));
    Ok(())
}

fn render_regions(dataset: &Dataset) -> String {
    dataset
        .regions()
        .into_iter()
        .map(|(region, count)| format!("{region}\t{count} records\n"))
        .collect()
}
