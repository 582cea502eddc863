use crate::{
    intersection::Computations,
    intersections::Intersections,
    light::PointLight,
    material::Material,
    shape::{sphere::Sphere, Intersect, Shape},
    Color, Matrix, Ray, Result, Tuple,
};

/// Recursion budget for reflected and refracted rays
/// when the caller doesn't choose one.
pub const DEFAULT_REMAINING: usize = 5;

/// A collection of objects and the light sources that illuminate them.
#[derive(Debug, Default)]
pub struct World {
    objects: Vec<Box<dyn Shape>>,
    lights: Vec<PointLight>,
}

impl World {
    /// Constructs an empty world with no objects and no light.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object<S: Shape + 'static>(&mut self, object: S) {
        log::debug!(
            "Adding {:?} #{} to world",
            object.shape_type(),
            self.objects.len()
        );
        self.objects.push(Box::new(object));
    }

    pub fn add_light(&mut self, light: PointLight) {
        log::debug!("Adding light at {:?} to world", light.position);
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Box<dyn Shape>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Box<dyn Shape>] {
        &mut self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut [PointLight] {
        &mut self.lights
    }

    /// Whether the world holds a shape that is equal (by value) to `object`.
    pub fn contains_object<S: Shape + 'static>(&self, object: &S) -> bool {
        let object: &(dyn Shape + 'static) = object;
        self.objects.iter().any(|o| o.as_ref() == object)
    }

    pub fn contains_light(&self, light: &PointLight) -> bool {
        self.lights.contains(light)
    }

    /// Intersects every object in the world with the ray.
    /// The result is not sorted; `hit()` sorts it on demand.
    pub fn intersect_world(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs = Intersections::new();
        for object in &self.objects {
            xs.append(object.as_ref().intersect(ray));
        }
        xs
    }

    /// Whether something lies between `point` and `light`.
    /// A point at the light's own position is never shadowed.
    pub fn is_shadowed(&self, point: Tuple, light: &PointLight) -> Result<bool> {
        let distance_vector = light.position - point;
        let distance = distance_vector.magnitude();
        if distance == 0. {
            return Ok(false);
        }
        let direction = distance_vector.norm()?;

        let ray = Ray::new(point, direction);
        let mut xs = self.intersect_world(&ray);
        Ok(xs.hit().is_some_and(|hit| hit.t < distance))
    }

    /// Returns the color at the intersection encapsulated by comps,
    /// in the given world: the surface lit by each light in turn,
    /// plus whatever is reflected and refracted there.
    /// Returns only the reflected and refracted colors if the world has no light source.
    pub fn shade_hit(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let material = comps.object.material();

        let surface = self
            .lights
            .iter()
            .map(|light| {
                let in_shadow = self.is_shadowed(comps.over_point, light)?;
                material.lighting(
                    light,
                    comps.over_point,
                    comps.eye_vector,
                    comps.normal_vector,
                    in_shadow,
                )
            })
            .sum::<Result<Color>>()?;

        let reflected = self.reflected_color(comps, remaining)?;
        let refracted = self.refracted_color(comps, remaining)?;

        if material.reflective > 0. && material.transparency > 0. {
            let reflectance = comps.schlick();
            Ok(surface + reflected * reflectance + refracted * (1. - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    /// Intersects the world with the given ray and returns
    /// the color at the resulting intersection, or black if nothing is hit.
    pub fn color_at(&self, ray: &Ray, remaining: usize) -> Result<Color> {
        let mut xs = self.intersect_world(ray);
        match xs.hit() {
            Some(hit) => {
                let comps = hit.prepare_computations(ray, &xs)?;
                self.shade_hit(&comps, remaining)
            }
            None => Ok(Color::black()),
        }
    }

    pub fn reflected_color(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let reflective = comps.object.material().reflective;
        if reflective == 0. {
            return Ok(Color::black());
        }
        if remaining == 0 {
            log::trace!("Reflection budget exhausted at t={}", comps.t);
            return Ok(Color::black());
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflect_vector);
        let color = self.color_at(&reflect_ray, remaining - 1)?;
        Ok(color * reflective)
    }

    pub fn refracted_color(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let transparency = comps.object.material().transparency;
        if transparency == 0. {
            return Ok(Color::black());
        }
        if remaining == 0 {
            log::trace!("Refraction budget exhausted at t={}", comps.t);
            return Ok(Color::black());
        }

        // Snell's law: sin(theta_i) * n1 = sin(theta_t) * n2
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eye_vector.dot(&comps.normal_vector);
        let sin2_t = n_ratio.powi(2) * (1. - cos_i.powi(2));
        if sin2_t > 1. {
            // total internal reflection
            return Ok(Color::black());
        }

        let cos_t = (1. - sin2_t).sqrt();
        let direction =
            comps.normal_vector * (n_ratio * cos_i - cos_t) - comps.eye_vector * n_ratio;

        let refract_ray = Ray::new(comps.under_point, direction);
        let color = self.color_at(&refract_ray, remaining - 1)?;
        Ok(color * transparency)
    }

    /// Constructs the default world with a light source at (-10, 10, -10)
    /// and two concentric spheres, where the outermost is a unit sphere
    /// and the innermost has a radius of 0.5. Both lie at the origin.
    pub fn default_world() -> Result<Self> {
        let mut world = Self::new();
        world.add_light(PointLight::new(Tuple::point(-10., 10., -10.), Color::white()));

        let material = Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        };
        world.add_object(Sphere::default().with_material(material));
        let inner = Sphere::default().with_transformation(Matrix::scaling(0.5, 0.5, 0.5))?;
        world.add_object(inner);

        Ok(world)
    }
}
