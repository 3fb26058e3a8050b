fn main() {
    let command = poisson_explorer::RunGuiCommand::new();

    command.execute();
}
