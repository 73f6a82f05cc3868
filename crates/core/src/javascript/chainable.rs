/// Something that can be chained onto a statement as a single call,
/// e.g. an effect: `.hide('slow', function() {...})`
pub trait ChainableStatement {
    fn chain_label(&self) -> &str;

    /// Arguments, each already rendered as JavaScript
    fn statement_args(&self) -> Vec<String>;
}
