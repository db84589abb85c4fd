//! Geometrie-Primitive: Polygone, Linienzüge und achsenparallele Bounding-Boxes.

use glam::DVec3;

/// Polygon aus Vertices und Dreiecks-Indizes (Triangle-List).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// ID des Polygons (wird beim Einfügen ins Modell vergeben, z.B. "P3")
    pub id: Option<String>,
    /// Eckpunkte in Weltkoordinaten
    pub vertices: Vec<DVec3>,
    /// Dreiecks-Indizes in `vertices` (Länge ist Vielfaches von 3)
    pub indices: Vec<u32>,
}

impl Polygon {
    /// Erstellt ein Polygon ohne ID.
    pub fn new(vertices: Vec<DVec3>, indices: Vec<u32>) -> Self {
        Self {
            id: None,
            vertices,
            indices,
        }
    }

    /// Viereck aus vier Eckpunkten, trianguliert als `0,1,2 / 0,2,3`.
    pub fn quad(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> Self {
        Self::new(vec![a, b, c, d], vec![0, 1, 2, 0, 2, 3])
    }

    /// Wandstreifen mit 6 Eckpunkten (3 unten, 3 oben in umgekehrter Reihenfolge).
    pub fn strip6(vertices: [DVec3; 6]) -> Self {
        Self::new(vertices.to_vec(), vec![0, 1, 5, 5, 4, 1, 1, 4, 2, 2, 4, 3])
    }

    /// Trianguliert einen konvexen Ring als Fächer um den ersten Vertex.
    pub fn fan(vertices: Vec<DVec3>) -> Self {
        let n = vertices.len() as u32;
        let indices = (1..n.saturating_sub(1))
            .flat_map(|i| [0, i, i + 1])
            .collect();
        Self::new(vertices, indices)
    }

    /// Prüft die Index-Liste auf Vollständigkeit und gültige Vertex-Referenzen.
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "{} Indizes sind kein Vielfaches von 3",
                self.indices.len()
            ));
        }
        if let Some(&bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            return Err(format!(
                "Index {} ausserhalb von {} Vertices",
                bad,
                self.vertices.len()
            ));
        }
        Ok(())
    }

    /// Iteriert über alle Dreiecke (ungültige Indizes werden übersprungen).
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            Some([
                *self.vertices.get(tri[0] as usize)?,
                *self.vertices.get(tri[1] as usize)?,
                *self.vertices.get(tri[2] as usize)?,
            ])
        })
    }
}

/// Linienzug aus geordneten Vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    pub vertices: Vec<DVec3>,
}

impl LineString {
    /// Erstellt einen Linienzug.
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self { vertices }
    }

    /// Iteriert über aufeinanderfolgende Segmente.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// Bounding-Box über beliebige Punkte. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self { min: p, max: p },
                Some(b) => Self {
                    min: b.min.min(p),
                    max: b.max.max(p),
                },
            })
        })
    }

    /// Bounding-Box über alle Vertices aller Polygone.
    pub fn from_polygons(polygons: &[Polygon]) -> Option<Self> {
        Self::from_points(polygons.iter().flat_map(|p| p.vertices.iter().copied()))
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Ausdehnung pro Achse.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Größte Kantenlänge der Box.
    pub fn max_dimension(&self) -> f64 {
        self.size().max_element()
    }

    /// Vereinigung zweier Boxen.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
