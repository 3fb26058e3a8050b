use poisson_explorer::{ChartExportController, ParameterSnapshot, PpmFilePresenter, density_view};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ParameterSnapshot::default();

    let view = density_view(&params)?;
    println!("Poisson distribution, lambda = {:.2}", params.lambda);
    println!("Mean:     {:.4}", view.stats.mean);
    println!("Variance: {:.4}", view.stats.variance);
    println!("Std dev:  {:.4}", view.stats.std_dev);
    println!();
    println!("  x    P(X = x)");
    for row in &view.table {
        println!("{:>4}    {:.4}", row.x, row.mass);
    }

    let presenter = PpmFilePresenter::new();
    let mut controller = ChartExportController::new(presenter);

    controller.generate(&params, 800, 600)?;
    std::fs::create_dir_all("output")?;
    controller.write("output/poisson.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
