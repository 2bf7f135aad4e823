use jsonmvc::logging::{init_logging_with_config, LogConfig};
use jsonmvc::parameters_from_query;

const BASE_PATH: &str = "/solar";

fn main() -> anyhow::Result<()> {
    let _guard = init_logging_with_config(&LogConfig::default_dev())?;

    let dispatcher = solar_system::dispatcher()?;
    let routes = dispatcher.warm_up()?;
    println!("solar_system: {routes} routes under {BASE_PATH}");

    let requests = [
        ("GET", "/solar", ""),
        ("GET", "/solar/list/planets", "sort=name"),
        ("GET", "/solar/view/planet/3", ""),
        ("GET", "/solar/view/planet/5/moons", ""),
        ("GET", "/solar/view/planet/42", ""),
        ("POST", "/solar/create/planet", "name=Vulcan"),
        ("DELETE", "/solar/view/planet/3", ""),
    ];

    for (method, path, query) in requests {
        let response = dispatcher.dispatch(method, path, BASE_PATH, parameters_from_query(query));
        println!("{method} {path} -> {} {}", response.status, response.body);
    }

    Ok(())
}
