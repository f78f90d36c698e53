//! 세션 동안 정의되는 엔티티(host/target/test)와 저장소.

use std::collections::BTreeMap;

use crate::domain::datasize::{self, ByteCount};
use crate::domain::error::DefinitionError;

pub const DEFAULT_TARGET_PORT: u16 = 5001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub address: String,
}

impl Host {
    pub fn new(name: &str, address: &str) -> Result<Self, DefinitionError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(DefinitionError::invalid("host", name, "address is empty"));
        }
        if address.chars().any(char::is_whitespace) {
            return Err(DefinitionError::invalid(
                "host",
                name,
                format!("address contains whitespace: {address:?}"),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
        })
    }
}

/// 부하를 받을 대상. `host`는 host 이름이며 실행 시점에 해석된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Target {
    pub fn new(name: &str, host: &str, port: Option<u16>) -> Result<Self, DefinitionError> {
        if host.trim().is_empty() {
            return Err(DefinitionError::invalid("target", name, "host name is empty"));
        }
        let port = port.unwrap_or(DEFAULT_TARGET_PORT);
        if port == 0 {
            return Err(DefinitionError::invalid("target", name, "port must be non-zero"));
        }

        Ok(Self {
            name: name.to_string(),
            host: host.trim().to_string(),
            port,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDefinition {
    pub name: String,
    /// 전송 1회당 바이트 수
    pub size: u64,
    pub count: u32,
    /// 미지정 시 실행 엔진 기본값을 따른다.
    pub workers: Option<u32>,
}

impl TestDefinition {
    pub fn new(
        name: &str,
        size: &str,
        count: Option<u32>,
        workers: Option<u32>,
    ) -> Result<Self, DefinitionError> {
        let parsed = datasize::parse(size).map_err(|source| DefinitionError::Size {
            name: name.to_string(),
            source,
        })?;
        let size = match parsed {
            ByteCount::Exact(0) => {
                return Err(DefinitionError::invalid("test", name, "size must be non-zero"));
            }
            ByteCount::Exact(n) => n,
            ByteCount::Fractional(v) => {
                return Err(DefinitionError::invalid(
                    "test",
                    name,
                    format!("size must be a whole number of bytes, got {v}"),
                ));
            }
        };

        let count = count.unwrap_or(1);
        if count == 0 {
            return Err(DefinitionError::invalid("test", name, "count must be at least 1"));
        }
        if workers == Some(0) {
            return Err(DefinitionError::invalid("test", name, "workers must be at least 1"));
        }

        Ok(Self {
            name: name.to_string(),
            size,
            count,
            workers,
        })
    }
}

/// 이름 -> 엔티티 매핑 3종. 같은 이름으로 다시 정의하면 조용히 덮어쓴다.
#[derive(Debug, Default)]
pub struct EntityStore {
    hosts: BTreeMap<String, Host>,
    targets: BTreeMap<String, Target>,
    tests: BTreeMap<String, TestDefinition>,
}

impl EntityStore {
    pub fn put_host(&mut self, host: Host) {
        self.hosts.insert(host.name.clone(), host);
    }

    pub fn put_target(&mut self, target: Target) {
        self.targets.insert(target.name.clone(), target);
    }

    pub fn put_test(&mut self, test: TestDefinition) {
        self.tests.insert(test.name.clone(), test);
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.get(name)
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn test(&self, name: &str) -> Option<&TestDefinition> {
        self.tests.get(name)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.values()
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }

    pub fn tests(&self) -> impl Iterator<Item = &TestDefinition> {
        self.tests.values()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.targets.is_empty() && self.tests.is_empty()
    }
}

/// 레거시 `server`/`client` 명령이 누적하는 역할 목록.
#[derive(Debug, Default)]
pub struct RoleRoster {
    pub servers: Vec<String>,
    pub clients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefining_host_keeps_last_write() {
        let mut store = EntityStore::default();
        store.put_host(Host::new("a", "10.0.0.1").unwrap());
        store.put_host(Host::new("a", "10.0.0.2").unwrap());

        assert_eq!(store.hosts().count(), 1);
        assert_eq!(store.host("a").unwrap().address, "10.0.0.2");
    }

    #[test]
    fn host_rejects_blank_address() {
        assert!(Host::new("a", "  ").is_err());
        assert!(Host::new("a", "1.2.3.4 5").is_err());
    }

    #[test]
    fn target_defaults_port() {
        let target = Target::new("t", "a", None).unwrap();
        assert_eq!(target.port, DEFAULT_TARGET_PORT);
        assert!(Target::new("t", "a", Some(0)).is_err());
    }

    #[test]
    fn test_definition_parses_size() {
        let test = TestDefinition::new("bulk", "10MiB", Some(3), None).unwrap();
        assert_eq!(test.size, 10 * 1024 * 1024);
        assert_eq!(test.count, 3);
    }

    #[test]
    fn test_definition_rejects_bad_fields() {
        assert!(matches!(
            TestDefinition::new("x", "lots", None, None),
            Err(DefinitionError::Size { .. })
        ));
        assert!(TestDefinition::new("x", "1.5", None, None).is_err());
        assert!(TestDefinition::new("x", "0", None, None).is_err());
        assert!(TestDefinition::new("x", "1K", Some(0), None).is_err());
        assert!(TestDefinition::new("x", "1K", None, Some(0)).is_err());
    }
}
