/// A page whose state is mock-generated on load and then edited in place
/// by user actions.
///
/// The page server owns one value per open page and never shares it across
/// pages. `load` is called once, after the simulated fetch delay.
pub trait PageModel: Sized {
    type Params: Clone + Send + Sync + 'static;
    type Action: Clone + Send + Sync + 'static;
    type View: Clone + Send + Sync + 'static;
    type Rejection: std::error::Error + Send + Sync + 'static;

    fn load(params: Self::Params, seed: u64) -> Self;

    fn apply(&mut self, action: Self::Action) -> Result<(), Self::Rejection>;

    fn view(&self) -> Self::View;
}
