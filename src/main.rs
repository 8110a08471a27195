use miette::Result;

/// Main entry point for the graph-scc CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    graph_scc::run()
}
