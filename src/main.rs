use fractal_zoom::{CliRenderController, ExplorerConfig, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    std::fs::create_dir_all("output")?;

    let presenter = PpmFilePresenter::new();
    let mut controller = CliRenderController::new(presenter, ExplorerConfig::default())?;

    controller.generate()?;
    controller.write("output/fractal.ppm")?;

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
