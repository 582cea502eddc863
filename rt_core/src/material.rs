use crate::{color::Color, common::equal, light::PointLight, Result, Tuple};

#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    /// 0 is a matte surface, 1 is a perfect mirror.
    pub reflective: f64,
    /// 0 is opaque, 1 lets all light through.
    pub transparency: f64,
    pub refractive_index: f64,
}

impl Material {
    /// Adds together the material's ambient, diffuse, and specular components,
    /// weighted by the angles between the eye_vector and the normal_vector.
    /// Normal and eye vectors are expected to be normalized.
    pub fn lighting(
        &self,
        light: &PointLight,
        point: Tuple,
        eye_vector: Tuple,
        normal_vector: Tuple,
        in_shadow: bool,
    ) -> Result<Color> {
        // combine the surface color with the light's color/intensity
        let effective_color = self.color * light.intensity;

        // compute the ambient contribution
        let ambient = effective_color * self.ambient;

        if in_shadow {
            // only the ambient light illuminates the material if we're in shadow
            return Ok(ambient);
        }

        // find the direction to the light source;
        // a light sitting right on the point has none
        let to_light = light.position - point;
        if to_light.magnitude() == 0. {
            return Ok(ambient);
        }
        let light_vector = to_light.norm()?;

        // light_dot_normal represents the cosine of the angle between
        // the light vector and the normal vector. A negative number means
        // the light is on the other side of the surface.
        let light_dot_normal = light_vector.dot(&normal_vector);

        if light_dot_normal <= 0. {
            // diffuse and specular are both black when the light is behind the surface
            return Ok(ambient);
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;

        // reflect_dot_eye represents the cosine of the angle between
        // the reflection vector and the eye vector. A negative number means
        // the light reflects away from the eye.
        let reflect_vector = (-light_vector).reflect(normal_vector)?;
        let reflect_dot_eye = reflect_vector.dot(&eye_vector);

        let specular = if reflect_dot_eye <= 0. {
            Color::black()
        } else {
            let factor = reflect_dot_eye.powf(self.shininess);
            light.intensity * self.specular * factor
        };

        Ok(ambient + diffuse + specular)
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && equal(self.ambient, other.ambient)
            && equal(self.diffuse, other.diffuse)
            && equal(self.specular, other.specular)
            && equal(self.shininess, other.shininess)
            && equal(self.reflective, other.reflective)
            && equal(self.transparency, other.transparency)
            && equal(self.refractive_index, other.refractive_index)
    }
}

impl Default for Material {
    /// Initialize material with the default parameters:
    /// color = white, ambient = 0.1, diffuse = 0.9, specular = 0.9,
    /// shininess = 200, opaque and non-reflective, refractive index of vacuum.
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            reflective: 0.,
            transparency: 0.,
            refractive_index: 1.,
        }
    }
}
