use std::collections::HashMap;

/// Source of named configuration values, usually the process environment.
pub trait EnvProvider {
    fn var(&self, name: &str) -> Option<String>;
}

pub struct EnvProviderImpl;
impl EnvProvider for EnvProviderImpl {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[derive(Default)]
pub struct FakeEnvProvider(pub HashMap<String, String>);
impl FakeEnvProvider {
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
impl EnvProvider for FakeEnvProvider {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
