//! Outbound packet channels for one session.
//!
//! Both directions are unbounded tokio channels: sends never block and keep
//! per-direction order. The connection tasks on the other end own framing and
//! encoding.

use mc_bridge_proto::packets::{DownstreamPacket, UpstreamPacket};
use tokio::sync::mpsc;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct PacketSink {
    upstream: mpsc::UnboundedSender<UpstreamPacket>,
    downstream: mpsc::UnboundedSender<DownstreamPacket>,
}

impl PacketSink {
    pub fn new(
        upstream: mpsc::UnboundedSender<UpstreamPacket>,
        downstream: mpsc::UnboundedSender<DownstreamPacket>,
    ) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    /// A sink plus the receiving ends of both directions.
    pub fn channel() -> (
        Self,
        mpsc::UnboundedReceiver<UpstreamPacket>,
        mpsc::UnboundedReceiver<DownstreamPacket>,
    ) {
        let (up_tx, up_rx) = mpsc::unbounded_channel();
        let (down_tx, down_rx) = mpsc::unbounded_channel();
        (Self::new(up_tx, down_tx), up_rx, down_rx)
    }

    /// Send a packet to the Bedrock client.
    pub fn send_upstream(&self, packet: impl Into<UpstreamPacket>) {
        let packet = packet.into();
        trace!("-> client 0x{:02X} {:?}", packet.packet_id(), packet);
        if self.upstream.send(packet).is_err() {
            debug!("Client connection gone, dropping upstream packet");
        }
    }

    /// Send a packet to the Java server.
    pub fn send_downstream(&self, packet: impl Into<DownstreamPacket>) {
        let packet = packet.into();
        trace!("-> server 0x{:02X} {:?}", packet.packet_id(), packet);
        if self.downstream.send(packet).is_err() {
            debug!("Server connection gone, dropping downstream packet");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_bridge_proto::packets::{PickItem, PlayerHotbar};

    #[test]
    fn packets_arrive_in_order_per_direction() {
        let (sink, mut up, mut down) = PacketSink::channel();
        sink.send_upstream(PlayerHotbar::select(1));
        sink.send_downstream(PickItem { slot: 10 });
        sink.send_upstream(PlayerHotbar::select(2));

        assert_eq!(up.try_recv().unwrap(), PlayerHotbar::select(1).into());
        assert_eq!(up.try_recv().unwrap(), PlayerHotbar::select(2).into());
        assert!(up.try_recv().is_err());
        assert_eq!(down.try_recv().unwrap(), PickItem { slot: 10 }.into());
    }

    #[test]
    fn closed_receiver_is_not_an_error() {
        let (sink, up, down) = PacketSink::channel();
        drop(up);
        drop(down);
        sink.send_upstream(PlayerHotbar::select(0));
        sink.send_downstream(PickItem { slot: 9 });
    }
}
