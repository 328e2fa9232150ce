//! Node address discovery

use super::{fill_or_abort, RandSource};

/// Returns the hardware address of the first network interface that exposes a usable one.
///
/// Loopback interfaces and all-zero addresses are skipped.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "openbsd",
    target_os = "netbsd"
))]
pub(crate) fn hardware_addr() -> Option<[u8; 6]> {
    use nix::{ifaddrs::getifaddrs, net::if_::InterfaceFlags};

    let interfaces = match getifaddrs() {
        Ok(interfaces) => interfaces,
        Err(err) => {
            tracing::debug!(%err, "could not enumerate network interfaces");
            return None;
        }
    };

    interfaces
        .filter(|ifaddr| !ifaddr.flags.contains(InterfaceFlags::IFF_LOOPBACK))
        .find_map(|ifaddr| {
            let addr = ifaddr.address?.as_link_addr()?.addr()?;
            (addr != [0u8; 6]).then_some(addr)
        })
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
pub(crate) fn hardware_addr() -> Option<[u8; 6]> {
    None
}

/// Returns a random node address with the multicast bit set, which marks it as one that no
/// network card carries.
pub(crate) fn random_addr<R: RandSource + ?Sized>(rand: &mut R) -> [u8; 6] {
    let mut addr = [0u8; 6];
    fill_or_abort(rand, &mut addr);
    addr[0] |= 0x01;
    addr
}

#[cfg(test)]
mod tests {
    use super::{hardware_addr, random_addr};
    use crate::generator::with_rand08::Adapter;
    use rand::rngs::mock::StepRng;

    /// Sets multicast bit of random node
    #[test]
    fn sets_multicast_bit_of_random_node() {
        let mut zeros = Adapter(StepRng::new(0, 0));
        assert_eq!(random_addr(&mut zeros), [0x01, 0, 0, 0, 0, 0]);

        let mut ones = Adapter(StepRng::new(u64::MAX, 0));
        assert_eq!(random_addr(&mut ones), [0xff; 6]);

        let mut rng = Adapter(rand::rngs::OsRng);
        for _ in 0..1_000 {
            assert_eq!(random_addr(&mut rng)[0] & 0x01, 0x01);
        }
    }

    /// Returns nonzero hardware address if any
    #[test]
    fn returns_nonzero_hardware_address_if_any() {
        if let Some(addr) = hardware_addr() {
            assert_ne!(addr, [0u8; 6]);
            assert_eq!(hardware_addr(), Some(addr));
        }
    }
}
