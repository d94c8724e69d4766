use common_enums::GatewayMode;

/// A parsed connector reply together with the context needed to normalize it.
#[derive(Debug, Clone)]
pub struct ResponseRouterData<Response> {
    pub response: Response,
    pub mode: GatewayMode,
}
