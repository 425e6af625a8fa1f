use crate::models::{Product, ProductDto};

/// Converts between the wire DTO and the domain product.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_dto(&self, product: &Product) -> ProductDto {
        ProductDto {
            id: product.product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            currency_code: product.currency_code.clone(),
        }
    }

    pub fn to_domain(&self, dto: ProductDto) -> Product {
        Product {
            product_id: dto.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            currency_code: dto.currency_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_survives_domain_conversion() {
        let mapper = ProductMapper::new();
        let dto = ProductDto {
            id: 12,
            name: "Desk".to_string(),
            description: "Oak, 160cm".to_string(),
            price: 349.5,
            currency_code: "EUR".to_string(),
        };

        let product = mapper.to_domain(dto.clone());
        assert_eq!(product.product_id, 12);
        assert_eq!(mapper.to_dto(&product), dto);
    }
}
