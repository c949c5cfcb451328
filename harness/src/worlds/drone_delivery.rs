//! `DroneDelivery`: eight-location city map for a delivery drone.
//!
//! Directed, weighted edges (kilometres). Every road is listed in both
//! directions with the same weight. The drone starts at `Base_Drone` and
//! delivers to `Hospital`.

use costwise_kernel::model::{GraphModel, ModelError, VertexId};

use crate::contract::RouteWorldV1;

pub struct DroneDelivery;

pub const BASE_DRONE: VertexId = 0;
pub const CENTRO_CIDADE: VertexId = 1;
pub const BAIRRO_NORTE: VertexId = 2;
pub const BAIRRO_SUL: VertexId = 3;
pub const ZONA_INDUSTRIAL: VertexId = 4;
pub const AEROPORTO: VertexId = 5;
pub const HOSPITAL: VertexId = 6;
pub const SHOPPING: VertexId = 7;

const NAMES: [&str; 8] = [
    "Base_Drone",
    "Centro_Cidade",
    "Bairro_Norte",
    "Bairro_Sul",
    "Zona_Industrial",
    "Aeroporto",
    "Hospital",
    "Shopping",
];

/// Edges grouped by source, in insertion order.
const EDGES: [(VertexId, VertexId, f64); 26] = [
    (BASE_DRONE, CENTRO_CIDADE, 5.5),
    (BASE_DRONE, BAIRRO_NORTE, 8.0),
    (BASE_DRONE, ZONA_INDUSTRIAL, 7.2),
    (CENTRO_CIDADE, BASE_DRONE, 5.5),
    (CENTRO_CIDADE, BAIRRO_NORTE, 6.8),
    (CENTRO_CIDADE, BAIRRO_SUL, 4.5),
    (CENTRO_CIDADE, SHOPPING, 3.2),
    (BAIRRO_NORTE, BASE_DRONE, 8.0),
    (BAIRRO_NORTE, CENTRO_CIDADE, 6.8),
    (BAIRRO_NORTE, AEROPORTO, 12.5),
    (BAIRRO_NORTE, HOSPITAL, 9.3),
    (BAIRRO_SUL, CENTRO_CIDADE, 4.5),
    (BAIRRO_SUL, ZONA_INDUSTRIAL, 6.1),
    (BAIRRO_SUL, SHOPPING, 5.8),
    (ZONA_INDUSTRIAL, BASE_DRONE, 7.2),
    (ZONA_INDUSTRIAL, BAIRRO_SUL, 6.1),
    (ZONA_INDUSTRIAL, AEROPORTO, 8.9),
    (AEROPORTO, BAIRRO_NORTE, 12.5),
    (AEROPORTO, ZONA_INDUSTRIAL, 8.9),
    (AEROPORTO, HOSPITAL, 7.4),
    (HOSPITAL, BAIRRO_NORTE, 9.3),
    (HOSPITAL, AEROPORTO, 7.4),
    (HOSPITAL, SHOPPING, 4.1),
    (SHOPPING, CENTRO_CIDADE, 3.2),
    (SHOPPING, BAIRRO_SUL, 5.8),
    (SHOPPING, HOSPITAL, 4.1),
];

impl RouteWorldV1 for DroneDelivery {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "drone_delivery"
    }

    fn graph(&self) -> Result<GraphModel, ModelError> {
        let mut graph = GraphModel::with_vertices(NAMES.len());
        for (id, name) in NAMES.iter().enumerate() {
            graph.set_name(id, *name)?;
        }
        for (from, to, weight) in EDGES {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    fn source(&self) -> VertexId {
        BASE_DRONE
    }

    fn goal(&self) -> VertexId {
        HOSPITAL
    }
}
